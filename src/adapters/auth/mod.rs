//! Authentication adapters.

mod jwt_verifier;
mod mock;

pub use jwt_verifier::JwtVerifier;
pub use mock::MockTokenVerifier;
