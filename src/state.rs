//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    db::{
        repositories::{QuizRepository, QuizStore, SubmissionRepository, SubmissionStore},
        MemoryStore,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Quiz definitions
    quizzes: Arc<dyn QuizStore>,

    /// Recorded submissions
    submissions: Arc<dyn SubmissionStore>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state from explicit stores
    pub fn new(
        quizzes: Arc<dyn QuizStore>,
        submissions: Arc<dyn SubmissionStore>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                quizzes,
                submissions,
                config,
            }),
        }
    }

    /// State backed by Postgres repositories sharing one pool
    pub fn with_postgres(pool: PgPool, config: Config) -> Self {
        Self::new(
            Arc::new(QuizRepository::new(pool.clone())),
            Arc::new(SubmissionRepository::new(pool)),
            config,
        )
    }

    /// State backed by a single in-process store
    pub fn with_memory(store: Arc<MemoryStore>, config: Config) -> Self {
        Self::new(store.clone(), store, config)
    }

    /// Quiz storage
    pub fn quizzes(&self) -> &dyn QuizStore {
        self.inner.quizzes.as_ref()
    }

    /// Submission storage
    pub fn submissions(&self) -> &dyn SubmissionStore {
        self.inner.submissions.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
