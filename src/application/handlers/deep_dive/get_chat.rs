//! GetChatHandler - one card's conversation history.

use std::sync::Arc;

use serde::Serialize;

use super::DeepDiveError;
use crate::domain::catalog::find_card;
use crate::domain::deep_dive::{CardStatus, ChatMessage};
use crate::domain::foundation::UserId;
use crate::ports::{CardProgress, DeepDiveStore};

/// Query for one card's chat.
#[derive(Debug, Clone)]
pub struct GetChatQuery {
    pub user_id: UserId,
    pub card_id: String,
}

/// Card metadata plus its conversation, oldest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetChatResult {
    pub card_id: String,
    pub title: String,
    /// Shown by clients as the opening assistant turn when history is empty.
    pub initial_question: String,
    pub status: CardStatus,
    pub summary: Option<String>,
    pub messages: Vec<ChatMessage>,
}

/// Handler for reading a card's chat.
///
/// Opening a card counts as starting it: the card moves to in-progress on
/// first access. Completed cards keep their status and summary.
pub struct GetChatHandler {
    store: Arc<dyn DeepDiveStore>,
}

impl GetChatHandler {
    pub fn new(store: Arc<dyn DeepDiveStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetChatQuery) -> Result<GetChatResult, DeepDiveError> {
        let (axis, card) =
            find_card(&query.card_id).ok_or_else(|| DeepDiveError::UnknownCard(query.card_id.clone()))?;

        self.store
            .mark_in_progress(query.user_id, axis, &query.card_id)
            .await?;
        let progress = self
            .store
            .get_card_progress(query.user_id, &query.card_id)
            .await?
            .unwrap_or(CardProgress {
                status: CardStatus::InProgress,
                summary: None,
            });
        let messages = self.store.get_chat(query.user_id, &query.card_id).await?;

        Ok(GetChatResult {
            card_id: card.id.to_string(),
            title: card.title.to_string(),
            initial_question: card.initial_question.to_string(),
            status: progress.status,
            summary: progress.summary,
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::catalog::Axis;
    use crate::domain::deep_dive::{CardEngagement, ChatRole};
    use crate::ports::DeepDiveStoreError;

    #[derive(Default)]
    struct MockStore {
        chat: Vec<ChatMessage>,
        progress: Mutex<HashMap<String, CardProgress>>,
        marked: Mutex<Vec<String>>,
    }

    impl MockStore {
        fn with_chat(chat: Vec<ChatMessage>) -> Self {
            Self {
                chat,
                ..Default::default()
            }
        }

        fn with_progress(card_id: &str, progress: CardProgress) -> Self {
            let store = Self::default();
            store
                .progress
                .lock()
                .unwrap()
                .insert(card_id.to_string(), progress);
            store
        }
    }

    #[async_trait]
    impl DeepDiveStore for MockStore {
        async fn get_card_engagements(
            &self,
            _user_id: UserId,
            _axis: Axis,
        ) -> Result<HashMap<String, CardEngagement>, DeepDiveStoreError> {
            unimplemented!()
        }

        async fn get_axis_progress(
            &self,
            _user_id: UserId,
            _axis: Axis,
        ) -> Result<HashMap<String, CardProgress>, DeepDiveStoreError> {
            unimplemented!()
        }

        async fn get_chat(
            &self,
            _user_id: UserId,
            _card_id: &str,
        ) -> Result<Vec<ChatMessage>, DeepDiveStoreError> {
            Ok(self.chat.clone())
        }

        async fn get_card_progress(
            &self,
            _user_id: UserId,
            card_id: &str,
        ) -> Result<Option<CardProgress>, DeepDiveStoreError> {
            Ok(self.progress.lock().unwrap().get(card_id).cloned())
        }

        async fn append_message(
            &self,
            _user_id: UserId,
            _card_id: &str,
            _role: ChatRole,
            _message: &str,
        ) -> Result<ChatMessage, DeepDiveStoreError> {
            unimplemented!()
        }

        async fn mark_in_progress(
            &self,
            _user_id: UserId,
            _axis: Axis,
            card_id: &str,
        ) -> Result<(), DeepDiveStoreError> {
            self.marked.lock().unwrap().push(card_id.to_string());
            let mut progress = self.progress.lock().unwrap();
            let row = progress.entry(card_id.to_string()).or_insert(CardProgress {
                status: CardStatus::InProgress,
                summary: None,
            });
            if row.status != CardStatus::Completed {
                row.status = CardStatus::InProgress;
            }
            Ok(())
        }

        async fn complete_card(
            &self,
            _user_id: UserId,
            _axis: Axis,
            _card_id: &str,
            _summary: &str,
        ) -> Result<CardProgress, DeepDiveStoreError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn returns_card_metadata_with_history() {
        let chat = vec![ChatMessage::new(ChatRole::User, "Locals first", Utc::now())];
        let handler = GetChatHandler::new(Arc::new(MockStore::with_chat(chat)));

        let result = handler
            .handle(GetChatQuery {
                user_id: UserId::new(1),
                card_id: "concept_1_2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.card_id, "concept_1_2");
        assert_eq!(result.title, "Target");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.status, CardStatus::InProgress);
    }

    #[tokio::test]
    async fn first_access_marks_the_card_in_progress() {
        let store = Arc::new(MockStore::default());
        let handler = GetChatHandler::new(store.clone());

        let result = handler
            .handle(GetChatQuery {
                user_id: UserId::new(1),
                card_id: "concept_1_1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            store.marked.lock().unwrap().as_slice(),
            ["concept_1_1".to_string()]
        );
        assert_eq!(result.status, CardStatus::InProgress);
        assert_eq!(result.summary, None);
    }

    #[tokio::test]
    async fn completed_card_keeps_status_and_summary() {
        let store = MockStore::with_progress(
            "concept_1_3",
            CardProgress {
                status: CardStatus::Completed,
                summary: Some("Locals-first bistro.".to_string()),
            },
        );
        let handler = GetChatHandler::new(Arc::new(store));

        let result = handler
            .handle(GetChatQuery {
                user_id: UserId::new(1),
                card_id: "concept_1_3".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, CardStatus::Completed);
        assert_eq!(result.summary.as_deref(), Some("Locals-first bistro."));
    }

    #[tokio::test]
    async fn unknown_card_is_rejected_before_any_write() {
        let store = Arc::new(MockStore::default());
        let handler = GetChatHandler::new(store.clone());
        let err = handler
            .handle(GetChatQuery {
                user_id: UserId::new(1),
                card_id: "concept_9_9".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DeepDiveError::UnknownCard(_)));
        assert!(store.marked.lock().unwrap().is_empty());
    }
}
