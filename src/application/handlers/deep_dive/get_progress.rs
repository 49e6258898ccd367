//! GetProgressHandler - engagement-based score for one axis's deep dive.

use std::sync::Arc;

use super::DeepDiveError;
use crate::domain::catalog::Axis;
use crate::domain::foundation::UserId;
use crate::domain::scoring::{score_engagement_axis, AxisScoreResult};
use crate::ports::{AxisMetaReader, DeepDiveStore};

/// Query for one axis's deep-dive progress.
#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub user_id: UserId,
    pub axis_code: String,
}

pub type GetProgressResult = AxisScoreResult;

/// Handler for the deep-dive progress score.
pub struct GetProgressHandler {
    store: Arc<dyn DeepDiveStore>,
    axis_meta: Arc<dyn AxisMetaReader>,
}

impl GetProgressHandler {
    pub fn new(store: Arc<dyn DeepDiveStore>, axis_meta: Arc<dyn AxisMetaReader>) -> Self {
        Self { store, axis_meta }
    }

    pub async fn handle(&self, query: GetProgressQuery) -> Result<GetProgressResult, DeepDiveError> {
        let axis = Axis::from_code(&query.axis_code)
            .ok_or_else(|| DeepDiveError::UnknownAxis(query.axis_code.clone()))?;

        let engagements = self.store.get_card_engagements(query.user_id, axis).await?;
        let name = self.axis_meta.axis_name(query.user_id, axis.as_code()).await;
        Ok(score_engagement_axis(axis, &name, &engagements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;

    use crate::domain::deep_dive::{CardEngagement, ChatMessage, ChatRole};
    use crate::ports::{CardProgress, DeepDiveStoreError};

    struct MockStore {
        engagements: HashMap<String, CardEngagement>,
    }

    #[async_trait]
    impl DeepDiveStore for MockStore {
        async fn get_card_engagements(
            &self,
            _user_id: UserId,
            _axis: Axis,
        ) -> Result<HashMap<String, CardEngagement>, DeepDiveStoreError> {
            Ok(self.engagements.clone())
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

    struct NoOverrides;

    #[async_trait]
    impl AxisMetaReader for NoOverrides {
        async fn axis_names(&self, _user_id: UserId) -> HashMap<String, String> {
            HashMap::new()
        }
    }

    fn engaged() -> CardEngagement {
        CardEngagement {
            chat_history: vec![ChatMessage::new(ChatRole::User, "notes", Utc::now())],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn untouched_axis_scores_zero() {
        let handler = GetProgressHandler::new(
            Arc::new(MockStore {
                engagements: HashMap::new(),
            }),
            Arc::new(NoOverrides),
        );
        let result = handler
            .handle(GetProgressQuery {
                user_id: UserId::new(1),
                axis_code: "concept".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.score, 0.0);
        assert_eq!(result.total_questions, 11);
        assert_eq!(result.missing, 11);
    }

    #[tokio::test]
    async fn engaged_cards_raise_the_score() {
        let mut engagements = HashMap::new();
        engagements.insert("concept_1_1".to_string(), engaged());
        engagements.insert("concept_1_2".to_string(), engaged());
        engagements.insert("concept_1_3".to_string(), engaged());
        let handler = GetProgressHandler::new(
            Arc::new(MockStore { engagements }),
            Arc::new(NoOverrides),
        );

        let result = handler
            .handle(GetProgressQuery {
                user_id: UserId::new(1),
                axis_code: "concept".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.answered, 3);
        assert_eq!(result.score, 2.7);
    }

    #[tokio::test]
    async fn unknown_axis_is_rejected() {
        let handler = GetProgressHandler::new(
            Arc::new(MockStore {
                engagements: HashMap::new(),
            }),
            Arc::new(NoOverrides),
        );
        let err = handler
            .handle(GetProgressQuery {
                user_id: UserId::new(1),
                axis_code: "vibes".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DeepDiveError::UnknownAxis(_)));
    }
}
