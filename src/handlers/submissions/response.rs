//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{QuizSummary, ScoreResult, Submission};

/// Result returned to the student right after submitting
#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub submission_id: Uuid,
    pub student_name: String,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: i32,
    pub time_spent_seconds: i32,
    pub message: String,
}

impl From<Submission> for SubmitQuizResponse {
    fn from(submission: Submission) -> Self {
        Self {
            submission_id: submission.id,
            student_name: submission.student_name,
            score: submission.score_result.score,
            total_questions: submission.score_result.total_questions,
            percentage: submission.score_result.percentage,
            time_spent_seconds: submission.time_spent_seconds,
            message: "Quiz submitted successfully".to_string(),
        }
    }
}

/// Side-by-side view of one submission against the answer key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionView {
    pub submission_id: Uuid,
    pub quiz: QuizSummary,
    pub student_name: String,
    pub result: ScoreResult,
    pub time_spent_seconds: i32,
    pub submitted_at: DateTime<Utc>,
    pub items: Vec<CorrectionItem>,
}

/// One question of a correction view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionItem {
    pub question_index: u32,
    pub question: String,
    pub options: Vec<String>,
    /// `None` when the student left the question unanswered
    pub selected_option_index: Option<u8>,
    pub correct_option_index: u8,
    pub was_correct: bool,
}
