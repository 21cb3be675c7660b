//! Logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Request logging middleware.
///
/// Server errors log at `warn`; client rejections such as closed quizzes or
/// expired time limits are expected traffic and log at `info`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed with server error"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            rejected = status.is_client_error(),
            "Request completed"
        );
    }

    response
}
