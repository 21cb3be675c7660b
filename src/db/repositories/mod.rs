//! Database repositories
//!
//! Repositories handle all direct storage interactions. Services only see the
//! [`QuizStore`] and [`SubmissionStore`] traits, so the Postgres repositories
//! and the in-process [`MemoryStore`](crate::db::MemoryStore) are interchangeable.

pub mod quiz_repo;
pub mod submission_repo;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NewSubmission, QuizDefinition, Submission},
};

pub use quiz_repo::QuizRepository;
pub use submission_repo::SubmissionRepository;

/// Read access to quiz definitions plus the cascading delete
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Store a new quiz definition
    async fn insert(&self, quiz: &QuizDefinition) -> AppResult<()>;

    /// Find a quiz by ID
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizDefinition>>;

    /// All quizzes owned by a teacher, newest first
    async fn list_by_owner(&self, owner_id: &Uuid) -> AppResult<Vec<QuizDefinition>>;

    /// Delete a quiz and every submission recorded against it as one unit.
    ///
    /// Returns the number of submissions removed, or `None` when the quiz did
    /// not exist (in which case nothing is touched).
    async fn delete_with_submissions(&self, id: &Uuid) -> AppResult<Option<u64>>;
}

/// Append-only submission storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Assign an id and `submitted_at`, store, and return the record
    async fn record(&self, new: NewSubmission) -> AppResult<Submission>;

    /// Find submission by ID
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Submission>>;

    /// Submissions for a quiz, most recent first
    async fn find_by_quiz(&self, quiz_id: &Uuid) -> AppResult<Vec<Submission>>;

    /// Remove every submission for a quiz; only used by quiz deletion
    async fn delete_all_for_quiz(&self, quiz_id: &Uuid) -> AppResult<u64>;
}
