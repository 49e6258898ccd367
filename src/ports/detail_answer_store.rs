//! Port for the boolean detail-question answer store.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::catalog::SubmissionError;
use crate::domain::foundation::UserId;

/// Persists per-user boolean checklist answers. Updates overwrite in place;
/// there is no history of prior states.
#[async_trait]
pub trait DetailAnswerStore: Send + Sync {
    /// Returns the user's answer map. Questions the user never touched are
    /// simply absent; a `None` value means explicitly cleared.
    async fn get_boolean_answers(
        &self,
        user_id: UserId,
    ) -> Result<HashMap<String, Option<bool>>, AnswerStoreError>;

    /// Saves a full-checklist submission.
    ///
    /// Must reject unknown question codes and incomplete submissions before
    /// any mutation, leaving stored answers unchanged on failure.
    async fn save_boolean_answers(
        &self,
        user_id: UserId,
        answers: &HashMap<String, Option<bool>>,
    ) -> Result<(), AnswerStoreError>;
}

/// Errors from the answer store.
#[derive(Debug, thiserror::Error)]
pub enum AnswerStoreError {
    /// The submission was rejected before any write.
    #[error(transparent)]
    Rejected(#[from] SubmissionError),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for AnswerStoreError {
    fn from(err: sqlx::Error) -> Self {
        AnswerStoreError::Database(err.to_string())
    }
}
