//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{auth_middleware, AuthenticatedTeacher};
pub use logging::logging_middleware;
