//! Quiz response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::Subject;

/// Quiz as presented to a student (no answer key)
#[derive(Debug, Serialize)]
pub struct PublicQuizResponse {
    pub id: Uuid,
    pub title: String,
    pub subject: Subject,
    pub time_limit_minutes: u32,
    pub question_count: usize,
    pub questions: Vec<PublicQuestion>,
}

/// Question without its correct option
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub index: u32,
    pub text: String,
    pub options: Vec<String>,
}

/// Quiz deletion outcome
#[derive(Debug, Serialize)]
pub struct DeleteQuizResponse {
    pub id: Uuid,
    pub submissions_removed: u64,
    pub message: String,
}
