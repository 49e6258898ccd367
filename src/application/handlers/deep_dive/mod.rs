//! Deep-dive handlers: card lists, chat turns, completion, axis progress.

mod complete_card;
mod get_card_list;
mod get_chat;
mod get_progress;
mod send_message;

pub use complete_card::{CompleteCardCommand, CompleteCardHandler, CompleteCardResult};
pub use get_card_list::{
    CardView, GetCardListHandler, GetCardListQuery, GetCardListResult, StepView,
};
pub use get_chat::{GetChatHandler, GetChatQuery, GetChatResult};
pub use get_progress::{GetProgressHandler, GetProgressQuery, GetProgressResult};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};

use crate::ports::DeepDiveStoreError;

/// Errors shared by the deep-dive handlers.
#[derive(Debug, thiserror::Error)]
pub enum DeepDiveError {
    #[error("unknown axis code: {0}")]
    UnknownAxis(String),

    #[error("unknown card id: {0}")]
    UnknownCard(String),

    #[error(transparent)]
    Store(#[from] DeepDiveStoreError),
}
