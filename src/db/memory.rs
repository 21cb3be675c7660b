//! In-process storage backend
//!
//! Keeps quizzes and submissions behind one lock so the cascading quiz
//! delete is observed atomically by concurrent readers.

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repositories::{QuizStore, SubmissionStore};
use crate::{
    error::{AppError, AppResult},
    models::{NewSubmission, QuizDefinition, Submission},
    utils::now_utc,
};

#[derive(Default)]
struct Tables {
    quizzes: HashMap<Uuid, QuizDefinition>,
    submissions: HashMap<Uuid, Submission>,
}

impl Tables {
    fn remove_submissions_for(&mut self, quiz_id: &Uuid) -> u64 {
        let before = self.submissions.len();
        self.submissions.retain(|_, s| s.quiz_id != *quiz_id);
        (before - self.submissions.len()) as u64
    }
}

/// Memory-backed implementation of both storage traits
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn insert(&self, quiz: &QuizDefinition) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if tables.quizzes.contains_key(&quiz.id) {
            return Err(AppError::Validation(format!("Quiz {} already exists", quiz.id)));
        }
        tables.quizzes.insert(quiz.id, quiz.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizDefinition>> {
        Ok(self.tables.read().await.quizzes.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &Uuid) -> AppResult<Vec<QuizDefinition>> {
        let tables = self.tables.read().await;
        let mut quizzes: Vec<QuizDefinition> = tables
            .quizzes
            .values()
            .filter(|q| q.owner_id == *owner_id)
            .cloned()
            .collect();
        quizzes.sort_by_key(|q| Reverse((q.created_at, q.id)));
        Ok(quizzes)
    }

    async fn delete_with_submissions(&self, id: &Uuid) -> AppResult<Option<u64>> {
        let mut tables = self.tables.write().await;
        if tables.quizzes.remove(id).is_none() {
            return Ok(None);
        }
        Ok(Some(tables.remove_submissions_for(id)))
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn record(&self, new: NewSubmission) -> AppResult<Submission> {
        let submission = new.into_submission(Uuid::new_v4(), now_utc());
        self.tables
            .write()
            .await
            .submissions
            .insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Submission>> {
        Ok(self.tables.read().await.submissions.get(id).cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &Uuid) -> AppResult<Vec<Submission>> {
        let tables = self.tables.read().await;
        let mut submissions: Vec<Submission> = tables
            .submissions
            .values()
            .filter(|s| s.quiz_id == *quiz_id)
            .cloned()
            .collect();
        submissions.sort_by_key(|s| Reverse((s.submitted_at, s.id)));
        Ok(submissions)
    }

    async fn delete_all_for_quiz(&self, quiz_id: &Uuid) -> AppResult<u64> {
        Ok(self.tables.write().await.remove_submissions_for(quiz_id))
    }
}
