//! Authentication service
//!
//! Tokens are issued by the external identity provider; this service only
//! verifies them and resolves the teacher they belong to.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // teacher_id
    #[serde(default)]
    pub name: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Resolve the teacher id carried by a verified token
    pub fn teacher_id(claims: &Claims) -> AppResult<Uuid> {
        Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)
    }
}
