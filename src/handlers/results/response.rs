//! Results response DTOs

use serde::Serialize;

use crate::models::{QuizSummary, Submission};

/// Statistics for one quiz together with its submissions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizAggregate {
    pub quiz: QuizSummary,
    /// Most recent first
    pub submissions: Vec<Submission>,
    pub submission_count: usize,
    /// Absent when the quiz has no submissions
    pub average_percentage: Option<i32>,
}

/// Statistics across every quiz a teacher owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherOverview {
    pub quiz_count: usize,
    pub active_quiz_count: usize,
    pub quizzes_with_submissions: usize,
    pub submission_count: usize,
    /// Absent when no quiz has any submission
    pub average_percentage: Option<i32>,
}
