//! Quiz model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    constants::{MAX_QUIZ_TITLE_LENGTH, OPTIONS_PER_QUESTION},
    error::{AppError, AppResult},
};

/// Subjects a quiz can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Biology,
    Mathematics,
    English,
    Physics,
    Chemistry,
}

impl Subject {
    /// All subjects, in display order
    pub const ALL: [Subject; 5] = [
        Self::Biology,
        Self::Mathematics,
        Self::English,
        Self::Physics,
        Self::Chemistry,
    ];

    /// Get subject as its stored name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biology => "Biology",
            Self::Mathematics => "Mathematics",
            Self::English => "English",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Subject {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown subject: {}", s)))
    }
}

/// A single-correct-answer multiple choice question.
///
/// The position of a question inside its quiz is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_option_index: u8,
}

impl Question {
    /// Build a question, checking text, options and the correct index
    pub fn new(
        text: impl Into<String>,
        options: [String; OPTIONS_PER_QUESTION],
        correct_option_index: u8,
    ) -> AppResult<Self> {
        let question = Self {
            text: text.into(),
            options,
            correct_option_index,
        };
        question.check()?;
        Ok(question)
    }

    pub(crate) fn check(&self) -> AppResult<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::Validation("Question text cannot be empty".to_string()));
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::Validation("Question options cannot be empty".to_string()));
        }
        if usize::from(self.correct_option_index) >= OPTIONS_PER_QUESTION {
            return Err(AppError::Validation(format!(
                "Correct option index must be between 0 and {}",
                OPTIONS_PER_QUESTION - 1
            )));
        }
        Ok(())
    }

    /// Whether the given selection is this question's correct option
    pub fn is_correct(&self, selected: Option<u8>) -> bool {
        selected == Some(self.correct_option_index)
    }
}

/// Quiz definition as authored by a teacher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub id: Uuid,
    pub title: String,
    pub subject: Subject,
    pub owner_id: Uuid,
    pub questions: Vec<Question>,
    /// 0 means unlimited
    pub time_limit_minutes: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl QuizDefinition {
    /// Create a new, active quiz owned by `owner_id`
    pub fn new(
        title: impl Into<String>,
        subject: Subject,
        owner_id: Uuid,
        questions: Vec<Question>,
        time_limit_minutes: u32,
    ) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::Validation("Quiz title cannot be empty".to_string()));
        }
        if title.chars().count() > MAX_QUIZ_TITLE_LENGTH {
            return Err(AppError::Validation(format!(
                "Quiz title must be at most {} characters",
                MAX_QUIZ_TITLE_LENGTH
            )));
        }
        if questions.is_empty() {
            return Err(AppError::Validation(
                "A quiz must have at least one question".to_string(),
            ));
        }
        for question in &questions {
            question.check()?;
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            subject,
            owner_id,
            questions,
            time_limit_minutes,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    /// Number of questions in the quiz
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Time limit in seconds, `None` when unlimited
    pub fn time_limit_seconds(&self) -> Option<i64> {
        (self.time_limit_minutes > 0).then(|| i64::from(self.time_limit_minutes) * 60)
    }

    /// Summary projection used in aggregates and correction views
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id,
            title: self.title.clone(),
            subject: self.subject,
            question_count: self.question_count(),
            time_limit_minutes: self.time_limit_minutes,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Quiz summary without question content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: Uuid,
    pub title: String,
    pub subject: Subject,
    pub question_count: usize,
    pub time_limit_minutes: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; OPTIONS_PER_QUESTION] {
        ["a".into(), "b".into(), "c".into(), "d".into()]
    }

    #[test]
    fn test_subject_parse() {
        assert_eq!("Physics".parse::<Subject>().unwrap(), Subject::Physics);
        assert_eq!("mathematics".parse::<Subject>().unwrap(), Subject::Mathematics);
        assert!("History".parse::<Subject>().is_err());
    }

    #[test]
    fn test_question_rejects_bad_input() {
        assert!(Question::new("2+2?", options(), 3).is_ok());
        assert!(Question::new("  ", options(), 0).is_err());
        assert!(Question::new("2+2?", options(), 4).is_err());

        let mut blank = options();
        blank[2] = " ".into();
        assert!(Question::new("2+2?", blank, 0).is_err());
    }

    #[test]
    fn test_quiz_requires_questions_and_title() {
        let owner = Uuid::new_v4();
        assert!(QuizDefinition::new("Empty", Subject::Biology, owner, vec![], 0).is_err());

        let q = Question::new("Cell?", options(), 1).unwrap();
        assert!(QuizDefinition::new(" ", Subject::Biology, owner, vec![q.clone()], 0).is_err());

        let quiz = QuizDefinition::new(" Cells ", Subject::Biology, owner, vec![q], 10).unwrap();
        assert_eq!(quiz.title, "Cells");
        assert!(quiz.is_active);
        assert_eq!(quiz.time_limit_seconds(), Some(600));
        assert_eq!(quiz.summary().question_count, 1);
    }

    #[test]
    fn test_unlimited_time() {
        let q = Question::new("Cell?", options(), 1).unwrap();
        let quiz = QuizDefinition::new("Cells", Subject::Biology, Uuid::new_v4(), vec![q], 0).unwrap();
        assert_eq!(quiz.time_limit_seconds(), None);
    }
}
