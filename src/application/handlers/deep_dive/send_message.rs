//! SendMessageHandler - one chat turn against a deep-dive card.
//!
//! The user turn is stored before the provider is called, so the message
//! survives provider outages. A failed completion degrades to a canned
//! reply, which is also stored.

use std::sync::Arc;

use serde::Serialize;

use super::DeepDiveError;
use crate::domain::catalog::find_card;
use crate::domain::deep_dive::{coach_system_prompt, ChatMessage, ChatRole, FALLBACK_COACH_REPLY};
use crate::domain::foundation::UserId;
use crate::ports::{AiProvider, CompletionRequest, DeepDiveStore, Message, MessageRole};

const CHAT_MAX_TOKENS: u32 = 400;
const CHAT_TEMPERATURE: f32 = 0.7;

/// Command for one user chat turn.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub user_id: UserId,
    pub card_id: String,
    pub message: String,
}

/// The stored assistant reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResult {
    pub reply: ChatMessage,
}

/// Handler for deep-dive chat turns.
pub struct SendMessageHandler {
    store: Arc<dyn DeepDiveStore>,
    ai: Arc<dyn AiProvider>,
}

impl SendMessageHandler {
    pub fn new(store: Arc<dyn DeepDiveStore>, ai: Arc<dyn AiProvider>) -> Self {
        Self { store, ai }
    }

    pub async fn handle(&self, command: SendMessageCommand) -> Result<SendMessageResult, DeepDiveError> {
        let (axis, card) = find_card(&command.card_id)
            .ok_or_else(|| DeepDiveError::UnknownCard(command.card_id.clone()))?;

        let history = self.store.get_chat(command.user_id, &command.card_id).await?;
        self.store
            .append_message(command.user_id, &command.card_id, ChatRole::User, &command.message)
            .await?;
        self.store
            .mark_in_progress(command.user_id, axis, &command.card_id)
            .await?;

        let mut request = CompletionRequest::new()
            .with_system_prompt(coach_system_prompt(card.title, card.initial_question))
            .with_max_tokens(CHAT_MAX_TOKENS)
            .with_temperature(CHAT_TEMPERATURE);
        for turn in &history {
            let role = match turn.role {
                ChatRole::User => MessageRole::User,
                ChatRole::Assistant => MessageRole::Assistant,
            };
            request.messages.push(Message::new(role, turn.message.clone()));
        }
        request.messages.push(Message::user(command.message.clone()));

        let reply_text = match self.ai.complete(request).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(card_id = %command.card_id, error = %err, "chat completion failed, using canned reply");
                FALLBACK_COACH_REPLY.to_string()
            }
        };

        let reply = self
            .store
            .append_message(command.user_id, &command.card_id, ChatRole::Assistant, &reply_text)
            .await?;
        Ok(SendMessageResult { reply })
    }
}
