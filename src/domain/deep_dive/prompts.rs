//! Prompt text for the deep-dive coaching conversations.
//!
//! Deterministic fallbacks live next to the prompts so that callers degrade
//! the same way everywhere when the provider is down.

use super::{ChatMessage, ChatRole};

/// Reply used when the provider cannot answer a chat turn.
pub const FALLBACK_COACH_REPLY: &str = "I could not reach the coaching service \
just now. Your message is saved, so please try again in a moment.";

/// Summary used when the provider cannot summarize and no user turn exists.
pub const FALLBACK_SUMMARY: &str = "Discussed this topic; detailed notes to follow.";

/// System prompt for one card's coaching chat.
pub fn coach_system_prompt(card_title: &str, initial_question: &str) -> String {
    format!(
        "You are an experienced consultant coaching a first-time restaurant \
owner through opening preparations.\n\
Current topic: {card_title}\n\
Opening question: {initial_question}\n\n\
Guidelines:\n\
- Ask one focused follow-up question at a time.\n\
- Keep answers short, concrete, and encouraging.\n\
- Ground advice in restaurant-industry practice, not generic business talk.\n\
- When the user has covered the topic well, say so and suggest wrapping up."
    )
}

/// System prompt for condensing a card's chat into a plan note.
pub fn summary_system_prompt(card_title: &str) -> String {
    format!(
        "Summarize the conversation about '{card_title}' into two or three \
sentences of first-person planning notes, as if the restaurant owner wrote \
them. Capture decisions and concrete details only. Output plain text."
    )
}

/// User prompt carrying the transcript to summarize.
pub fn summary_user_prompt(history: &[ChatMessage]) -> String {
    let mut out = String::from("Conversation transcript:\n");
    for turn in history {
        let speaker = match turn.role {
            ChatRole::User => "Owner",
            ChatRole::Assistant => "Coach",
        };
        out.push_str(&format!("{speaker}: {}\n", turn.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn coach_prompt_names_the_card() {
        let prompt = coach_system_prompt("Target customers", "Who are you serving?");
        assert!(prompt.contains("Current topic: Target customers"));
        assert!(prompt.contains("Opening question: Who are you serving?"));
    }

    #[test]
    fn summary_user_prompt_labels_speakers() {
        let history = vec![
            ChatMessage::new(ChatRole::User, "Families nearby", Utc::now()),
            ChatMessage::new(ChatRole::Assistant, "What price point?", Utc::now()),
        ];
        let prompt = summary_user_prompt(&history);
        assert!(prompt.contains("Owner: Families nearby"));
        assert!(prompt.contains("Coach: What price point?"));
    }
}
