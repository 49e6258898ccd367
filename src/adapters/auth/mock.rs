//! Mock TokenVerifier for tests.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Accepts any token and resolves to a fixed user, or rejects everything.
pub struct MockTokenVerifier {
    user: Option<AuthenticatedUser>,
}

impl MockTokenVerifier {
    pub fn allowing(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            user: Some(AuthenticatedUser::new(UserId::new(user_id), email.into())),
        }
    }

    pub fn rejecting() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, _token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.user.clone().ok_or(AuthError::InvalidToken)
    }
}
