//! UpdateOwnerNoteHandler - upserts the owner's dashboard note.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::ports::{NoteStoreError, OwnerNoteStore};

/// Upper bound on the note length, in characters.
pub const MAX_NOTE_CHARS: usize = 4000;

/// Errors from saving the owner note.
#[derive(Debug, Error)]
pub enum OwnerNoteError {
    #[error("note must not be empty")]
    Empty,
    #[error("note exceeds {MAX_NOTE_CHARS} characters")]
    TooLong,
    #[error(transparent)]
    Store(#[from] NoteStoreError),
}

/// Command to replace the user's note.
#[derive(Debug, Clone)]
pub struct UpdateOwnerNoteCommand {
    pub user_id: UserId,
    pub content: String,
}

/// The stored note after the upsert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOwnerNoteResult {
    pub owner_note: String,
}

/// Handler for the owner-note upsert.
pub struct UpdateOwnerNoteHandler {
    note_store: Arc<dyn OwnerNoteStore>,
}

impl UpdateOwnerNoteHandler {
    pub fn new(note_store: Arc<dyn OwnerNoteStore>) -> Self {
        Self { note_store }
    }

    pub async fn handle(
        &self,
        command: UpdateOwnerNoteCommand,
    ) -> Result<UpdateOwnerNoteResult, OwnerNoteError> {
        if command.content.trim().is_empty() {
            return Err(OwnerNoteError::Empty);
        }
        if command.content.chars().count() > MAX_NOTE_CHARS {
            return Err(OwnerNoteError::TooLong);
        }

        let owner_note = self
            .note_store
            .save_note(command.user_id, &command.content)
            .await?;
        Ok(UpdateOwnerNoteResult { owner_note })
    }
}
