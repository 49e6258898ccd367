//! Port for deep-dive chat logs and per-card progress.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::catalog::Axis;
use crate::domain::deep_dive::{CardEngagement, CardStatus, ChatMessage, ChatRole};
use crate::domain::foundation::UserId;

/// Stored status and summary for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardProgress {
    pub status: CardStatus,
    pub summary: Option<String>,
}

/// Persists deep-dive conversations and completion state.
///
/// The scoring engine only reads the engagement projection; how the
/// conversational service fills it in is not this port's concern.
#[async_trait]
pub trait DeepDiveStore: Send + Sync {
    /// Engagement snapshot for every card of an axis the user has touched.
    async fn get_card_engagements(
        &self,
        user_id: UserId,
        axis: Axis,
    ) -> Result<HashMap<String, CardEngagement>, DeepDiveStoreError>;

    /// Status/summary rows for an axis, keyed by card id.
    async fn get_axis_progress(
        &self,
        user_id: UserId,
        axis: Axis,
    ) -> Result<HashMap<String, CardProgress>, DeepDiveStoreError>;

    /// Chat history for one card, oldest first.
    async fn get_chat(
        &self,
        user_id: UserId,
        card_id: &str,
    ) -> Result<Vec<ChatMessage>, DeepDiveStoreError>;

    /// Progress row for one card, if any.
    async fn get_card_progress(
        &self,
        user_id: UserId,
        card_id: &str,
    ) -> Result<Option<CardProgress>, DeepDiveStoreError>;

    /// Appends a chat turn and returns the stored message.
    async fn append_message(
        &self,
        user_id: UserId,
        card_id: &str,
        role: ChatRole,
        message: &str,
    ) -> Result<ChatMessage, DeepDiveStoreError>;

    /// Marks a card in progress unless it is already completed.
    async fn mark_in_progress(
        &self,
        user_id: UserId,
        axis: Axis,
        card_id: &str,
    ) -> Result<(), DeepDiveStoreError>;

    /// Marks a card completed and stores its summary.
    async fn complete_card(
        &self,
        user_id: UserId,
        axis: Axis,
        card_id: &str,
        summary: &str,
    ) -> Result<CardProgress, DeepDiveStoreError>;
}

/// Errors from the deep-dive store.
#[derive(Debug, thiserror::Error)]
pub enum DeepDiveStoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for DeepDiveStoreError {
    fn from(err: sqlx::Error) -> Self {
        DeepDiveStoreError::Database(err.to_string())
    }
}
