//! CompleteCardHandler - closes a card and records its plan note.
//!
//! The summary comes from the provider when possible; otherwise the last
//! user turn (clipped) stands in, so completion always succeeds.

use std::sync::Arc;

use serde::Serialize;

use super::DeepDiveError;
use crate::domain::catalog::find_card;
use crate::domain::deep_dive::{
    summary_system_prompt, summary_user_prompt, CardStatus, ChatRole, FALLBACK_SUMMARY,
};
use crate::domain::foundation::UserId;
use crate::ports::{AiProvider, CompletionRequest, DeepDiveStore, MessageRole};

const SUMMARY_MAX_TOKENS: u32 = 200;
const SUMMARY_TEMPERATURE: f32 = 0.3;
const FALLBACK_CLIP_CHARS: usize = 200;

/// Command to complete one card.
#[derive(Debug, Clone)]
pub struct CompleteCardCommand {
    pub user_id: UserId,
    pub card_id: String,
}

/// The card's final state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteCardResult {
    pub card_id: String,
    pub status: CardStatus,
    pub summary: String,
}

/// Handler for card completion.
pub struct CompleteCardHandler {
    store: Arc<dyn DeepDiveStore>,
    ai: Arc<dyn AiProvider>,
}

impl CompleteCardHandler {
    pub fn new(store: Arc<dyn DeepDiveStore>, ai: Arc<dyn AiProvider>) -> Self {
        Self { store, ai }
    }

    pub async fn handle(&self, command: CompleteCardCommand) -> Result<CompleteCardResult, DeepDiveError> {
        let (axis, card) = find_card(&command.card_id)
            .ok_or_else(|| DeepDiveError::UnknownCard(command.card_id.clone()))?;

        let history = self.store.get_chat(command.user_id, &command.card_id).await?;

        let request = CompletionRequest::new()
            .with_system_prompt(summary_system_prompt(card.title))
            .with_message(MessageRole::User, summary_user_prompt(&history))
            .with_max_tokens(SUMMARY_MAX_TOKENS)
            .with_temperature(SUMMARY_TEMPERATURE);

        let summary = match self.ai.complete(request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => fallback_summary(&history),
            Err(err) => {
                tracing::warn!(card_id = %command.card_id, error = %err, "summary completion failed, using fallback");
                fallback_summary(&history)
            }
        };

        let progress = self
            .store
            .complete_card(command.user_id, axis, &command.card_id, &summary)
            .await?;
        Ok(CompleteCardResult {
            card_id: command.card_id,
            status: progress.status,
            summary,
        })
    }
}

/// Last user turn clipped to a note-sized length, or the generic note.
fn fallback_summary(history: &[crate::domain::deep_dive::ChatMessage]) -> String {
    history
        .iter()
        .rev()
        .find(|m| m.role == ChatRole::User && !m.message.trim().is_empty())
        .map(|m| m.message.chars().take(FALLBACK_CLIP_CHARS).collect())
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}
