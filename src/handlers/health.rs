//! Health check handlers

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{config::StorageBackend, constants::storage_backends, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = match state.config().storage.backend {
        StorageBackend::Postgres => storage_backends::POSTGRES,
        StorageBackend::Memory => storage_backends::MEMORY,
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: storage.to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
