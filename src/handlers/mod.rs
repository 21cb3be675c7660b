//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod quizzes;
pub mod results;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/quizzes", quizzes::routes(state.clone()))
        .nest("/results", results::routes(state))
        .nest("/submissions", submissions::routes())
}
