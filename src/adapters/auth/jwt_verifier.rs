//! HS256 JWT implementation of TokenVerifier.
//!
//! Tokens are issued by the companion auth service with the user's database
//! id in `sub` and their email in `email`.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// Verifies HS256-signed bearer tokens.
pub struct JwtVerifier {
    secret: Secret<String>,
}

impl JwtVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &key, &validation).map_err(|err| {
            match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user_id: i64 = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::MissingClaim("sub".to_string()))?;
        let email = data
            .claims
            .email
            .ok_or_else(|| AuthError::MissingClaim("email".to_string()))?;

        Ok(AuthenticatedUser::new(UserId::new(user_id), email))
    }
}
