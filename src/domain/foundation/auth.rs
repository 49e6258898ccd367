//! Authenticated user identity and auth errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Identity resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

/// Errors from token verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token")]
    InvalidToken,

    #[error("token is missing required claim '{0}'")]
    MissingClaim(String),

    #[error("auth service unavailable: {0}")]
    ServiceUnavailable(String),
}
