//! Results handlers (teacher only)

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Results routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_results))
        .route("/summary", get(handler::get_overview))
        .route("/{quiz_id}", get(handler::get_quiz_results))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
