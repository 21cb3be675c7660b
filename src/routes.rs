//! Router assembly

use std::time::Duration;

use axum::{http::StatusCode, middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{constants::API_BASE_PATH, handlers, middleware::logging_middleware, state::AppState};

/// Assembles the main application router.
///
/// * Nests every API route under `/api/v1`.
/// * Applies global middleware (request logging, trace, timeout, compression, CORS).
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);

    Router::new()
        .nest(API_BASE_PATH, handlers::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
