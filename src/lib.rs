//! Quizmark - Quiz Scoring and Results Service
//!
//! This library provides the core of the Quizmark platform: scoring student
//! submissions against teacher-authored multiple-choice quizzes and rolling
//! the results up into per-quiz and per-teacher statistics.
//!
//! # Features
//!
//! - Deterministic scoring with a grace-adjusted time limit
//! - Append-only submission records
//! - Per-quiz and per-teacher aggregates with ownership checks
//! - Correction views keyed by unguessable submission ids
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Storage access (Postgres or in-memory)
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::create_router;
pub use state::AppState;
