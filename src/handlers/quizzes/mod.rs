//! Quiz handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{handlers::submissions, middleware::auth::auth_middleware, state::AppState};

/// Quiz routes
pub fn routes(state: AppState) -> Router<AppState> {
    // Students read and submit anonymously; only deletion needs a teacher
    let delete_route = delete(handler::delete_quiz)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/{id}", get(handler::get_quiz).merge(delete_route))
        .route("/{id}/submissions", post(submissions::submit_quiz))
}
