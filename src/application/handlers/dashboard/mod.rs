//! Dashboard query and command handlers.

mod get_dashboard;
mod update_owner_note;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
pub use update_owner_note::{
    OwnerNoteError, UpdateOwnerNoteCommand, UpdateOwnerNoteHandler, UpdateOwnerNoteResult,
    MAX_NOTE_CHARS,
};

use thiserror::Error;

use crate::ports::{AnswerStoreError, NoteStoreError};

/// Errors from building the dashboard view.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Answers(#[from] AnswerStoreError),
    #[error(transparent)]
    Notes(#[from] NoteStoreError),
}
