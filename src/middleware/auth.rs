//! Authentication middleware
//!
//! Adapter for the external identity provider: turns a bearer token into
//! an [`AuthenticatedTeacher`] on the request.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Teacher resolved from a verified JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedTeacher {
    pub id: Uuid,
    pub name: String,
}

impl<S> FromRequestParts<S> for AuthenticatedTeacher
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedTeacher>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).inspect_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
    })?;

    let teacher_id = AuthService::teacher_id(&claims).inspect_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: Invalid teacher ID in token");
    })?;

    let teacher = AuthenticatedTeacher {
        id: teacher_id,
        name: claims.name,
    };

    debug!(path = %path, teacher_id = %teacher.id, "Teacher authenticated");

    request.extensions_mut().insert(teacher);
    Ok(next.run(request).await)
}
