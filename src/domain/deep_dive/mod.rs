//! Deep-dive conversation state: chat messages, card status, engagement.

mod prompts;

pub use prompts::{
    coach_system_prompt, summary_system_prompt, summary_user_prompt, FALLBACK_COACH_REPLY,
    FALLBACK_SUMMARY,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a card's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            role,
            message: message.into(),
            created_at,
        }
    }
}

/// Stored per-card progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::NotStarted => "not_started",
            CardStatus::InProgress => "in_progress",
            CardStatus::Completed => "completed",
        }
    }
}

/// Everything the scoring engine reads about one card.
///
/// All three fields may be absent or empty at once (pre-engagement state);
/// nothing here assumes how the conversational service populated them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardEngagement {
    pub chat_history: Vec<ChatMessage>,
    pub summary: Option<String>,
    pub is_completed: bool,
}

impl CardEngagement {
    /// A card counts as engaged when it has any chat history, a non-empty
    /// summary, or an explicit completion flag (inclusive OR).
    pub fn is_engaged(&self) -> bool {
        !self.chat_history.is_empty()
            || self.summary.as_deref().is_some_and(|s| !s.is_empty())
            || self.is_completed
    }
}
