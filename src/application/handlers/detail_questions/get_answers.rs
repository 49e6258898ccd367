//! GetAnswersHandler - the user's stored checklist answers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::{AnswerStoreError, DetailAnswerStore};

/// Query for stored answers.
#[derive(Debug, Clone)]
pub struct GetAnswersQuery {
    pub user_id: UserId,
}

/// Answer map keyed by question code. Untouched questions are absent.
pub type GetAnswersResult = HashMap<String, Option<bool>>;

/// Handler for reading stored answers.
pub struct GetAnswersHandler {
    answer_store: Arc<dyn DetailAnswerStore>,
}

impl GetAnswersHandler {
    pub fn new(answer_store: Arc<dyn DetailAnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(&self, query: GetAnswersQuery) -> Result<GetAnswersResult, AnswerStoreError> {
        self.answer_store.get_boolean_answers(query.user_id).await
    }
}
