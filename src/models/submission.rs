//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One answer inside a submission. `None` marks an unanswered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_index: u32,
    pub selected_option_index: Option<u8>,
}

impl SubmittedAnswer {
    pub fn answered(question_index: u32, selected: u8) -> Self {
        Self {
            question_index,
            selected_option_index: Some(selected),
        }
    }

    pub fn unanswered(question_index: u32) -> Self {
        Self {
            question_index,
            selected_option_index: None,
        }
    }
}

/// Outcome of scoring a set of answers against a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Number of correct answers
    pub score: i32,
    /// Quiz length at submission time
    pub total_questions: i32,
    /// Rounded half-up, always within 0..=100
    pub percentage: i32,
}

/// Submission database model. Never updated after insertion.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub owner_teacher_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    #[sqlx(json)]
    pub answers: Vec<SubmittedAnswer>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub score_result: ScoreResult,
    pub time_spent_seconds: i32,
    pub submitted_at: DateTime<Utc>,
}

/// Everything needed to record a submission; id and timestamp are assigned on insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub quiz_id: Uuid,
    pub owner_teacher_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub answers: Vec<SubmittedAnswer>,
    pub score_result: ScoreResult,
    pub time_spent_seconds: i32,
}

impl NewSubmission {
    /// Materialize the stored record
    pub fn into_submission(self, id: Uuid, submitted_at: DateTime<Utc>) -> Submission {
        Submission {
            id,
            quiz_id: self.quiz_id,
            owner_teacher_id: self.owner_teacher_id,
            student_name: self.student_name,
            student_email: self.student_email,
            answers: self.answers,
            score_result: self.score_result,
            time_spent_seconds: self.time_spent_seconds,
            submitted_at,
        }
    }
}
