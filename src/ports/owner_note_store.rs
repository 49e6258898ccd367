//! Port for the owner's free-form dashboard note.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Errors from the owner-note store.
#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for NoteStoreError {
    fn from(error: sqlx::Error) -> Self {
        NoteStoreError::Database(error.to_string())
    }
}

/// Stores one free-form note per user, shown on the dashboard.
#[async_trait]
pub trait OwnerNoteStore: Send + Sync {
    async fn get_note(&self, user_id: UserId) -> Result<Option<String>, NoteStoreError>;

    /// Upserts the note and returns the stored content.
    async fn save_note(&self, user_id: UserId, content: &str) -> Result<String, NoteStoreError>;
}
