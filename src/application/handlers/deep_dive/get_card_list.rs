//! GetCardListHandler - an axis's step ladder with per-card progress.
//!
//! Steps unlock in order: a step opens once every card of the previous step
//! is completed. The first step is always open.

use std::sync::Arc;

use serde::Serialize;

use super::DeepDiveError;
use crate::domain::catalog::{deep_dive_steps, Axis};
use crate::domain::deep_dive::CardStatus;
use crate::domain::foundation::UserId;
use crate::ports::DeepDiveStore;

/// Query for one axis's card list.
#[derive(Debug, Clone)]
pub struct GetCardListQuery {
    pub user_id: UserId,
    pub axis_code: String,
}

/// One card with the user's progress on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub initial_question: String,
    pub status: CardStatus,
    pub summary: Option<String>,
}

/// One step of the ladder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub step: u32,
    pub step_title: String,
    pub unlocked: bool,
    pub cards: Vec<CardView>,
}

pub type GetCardListResult = Vec<StepView>;

/// Handler for the per-axis card list.
pub struct GetCardListHandler {
    store: Arc<dyn DeepDiveStore>,
}

impl GetCardListHandler {
    pub fn new(store: Arc<dyn DeepDiveStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetCardListQuery) -> Result<GetCardListResult, DeepDiveError> {
        let axis = Axis::from_code(&query.axis_code)
            .ok_or_else(|| DeepDiveError::UnknownAxis(query.axis_code.clone()))?;

        let progress = self.store.get_axis_progress(query.user_id, axis).await?;

        let mut previous_completed = true;
        let mut steps = Vec::new();
        for def in deep_dive_steps(axis) {
            let unlocked = previous_completed;
            let cards: Vec<CardView> = def
                .cards
                .iter()
                .map(|card| {
                    let row = progress.get(card.id);
                    CardView {
                        id: card.id.to_string(),
                        title: card.title.to_string(),
                        initial_question: card.initial_question.to_string(),
                        status: row.map_or(CardStatus::NotStarted, |p| p.status),
                        summary: row.and_then(|p| p.summary.clone()),
                    }
                })
                .collect();
            previous_completed = cards.iter().all(|c| c.status == CardStatus::Completed);
            steps.push(StepView {
                step: def.step,
                step_title: def.step_title.to_string(),
                unlocked,
                cards,
            });
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    use crate::domain::deep_dive::{CardEngagement, ChatMessage, ChatRole};
    use crate::ports::{CardProgress, DeepDiveStoreError};

    struct MockStore {
        progress: HashMap<String, CardProgress>,
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
            Ok(self.progress.clone())
        }

        async fn get_chat(
            &self,
            _user_id: UserId,
            _card_id: &str,
        ) -> Result<Vec<ChatMessage>, DeepDiveStoreError> {
            unimplemented!()
        }

        async fn get_card_progress(
            &self,
            _user_id: UserId,
            _card_id: &str,
        ) -> Result<Option<CardProgress>, DeepDiveStoreError> {
            unimplemented!()
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
            _card_id: &str,
        ) -> Result<(), DeepDiveStoreError> {
            unimplemented!()
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

    fn completed(summary: &str) -> CardProgress {
        CardProgress {
            status: CardStatus::Completed,
            summary: Some(summary.to_string()),
        }
    }

    fn query() -> GetCardListQuery {
        GetCardListQuery {
            user_id: UserId::new(1),
            axis_code: "concept".to_string(),
        }
    }

    #[tokio::test]
    async fn fresh_user_sees_only_step_one_unlocked() {
        let handler = GetCardListHandler::new(Arc::new(MockStore {
            progress: HashMap::new(),
        }));
        let steps = handler.handle(query()).await.unwrap();

        assert_eq!(steps.len(), 3);
        assert!(steps[0].unlocked);
        assert!(!steps[1].unlocked);
        assert!(!steps[2].unlocked);
        assert!(steps
            .iter()
            .flat_map(|s| &s.cards)
            .all(|c| c.status == CardStatus::NotStarted));
    }

    #[tokio::test]
    async fn completing_step_one_unlocks_step_two() {
        let handler = GetCardListHandler::new(Arc::new(MockStore {
            progress: deep_dive_steps(Axis::Concept)[0]
                .cards
                .iter()
                .map(|c| (c.id.to_string(), completed("done")))
                .collect(),
        }));
        let steps = handler.handle(query()).await.unwrap();

        assert!(steps[1].unlocked);
        assert!(!steps[2].unlocked);
    }

    #[tokio::test]
    async fn progress_rows_are_projected_onto_cards() {
        let first_card = deep_dive_steps(Axis::Concept)[0].cards[0].id;
        let mut progress = HashMap::new();
        progress.insert(first_card.to_string(), completed("Locals-first bistro."));
        let handler = GetCardListHandler::new(Arc::new(MockStore { progress }));

        let steps = handler.handle(query()).await.unwrap();
        let card = &steps[0].cards[0];
        assert_eq!(card.status, CardStatus::Completed);
        assert_eq!(card.summary.as_deref(), Some("Locals-first bistro."));
    }

    #[tokio::test]
    async fn alias_axis_code_is_accepted() {
        let handler = GetCardListHandler::new(Arc::new(MockStore {
            progress: HashMap::new(),
        }));
        let result = handler
            .handle(GetCardListQuery {
                user_id: UserId::new(1),
                axis_code: "interior_exterior".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_axis_is_rejected() {
        let handler = GetCardListHandler::new(Arc::new(MockStore {
            progress: HashMap::new(),
        }));
        let err = handler
            .handle(GetCardListQuery {
                user_id: UserId::new(1),
                axis_code: "astrology".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DeepDiveError::UnknownAxis(_)));
    }
}
