//! Submission request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::{normalize_email, sanitize_string};

/// Score-and-submit request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub student_name: String,

    #[validate(email, length(max = 254))]
    pub student_email: String,

    /// May cover only part of the quiz; missing questions count as unanswered
    #[serde(default)]
    #[validate(length(max = 500), nested)]
    pub answers: Vec<AnswerPayload>,

    /// Seconds the student spent on the quiz, as measured by the client
    #[validate(range(min = 0, max = 2147483647))]
    pub elapsed_seconds: Option<i64>,
}

impl SubmitQuizRequest {
    /// Trim the name and lowercase the email before validation
    pub fn normalized(mut self) -> Self {
        self.student_name = sanitize_string(&self.student_name);
        self.student_email = normalize_email(&self.student_email);
        self
    }
}

/// A single answer as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerPayload {
    #[validate(range(min = 0))]
    pub question_index: i64,

    /// `null` when the student skipped the question
    #[validate(range(min = 0, max = 3))]
    pub selected_option_index: Option<i64>,
}
