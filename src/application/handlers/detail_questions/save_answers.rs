//! SaveAnswersHandler - validates and stores a full checklist submission.
//!
//! Validation happens here, before any port call, so a rejected submission
//! never touches storage.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::catalog::validate_submission;
use crate::domain::foundation::UserId;
use crate::ports::{AnswerStoreError, DetailAnswerStore};

/// Command carrying a full checklist submission.
#[derive(Debug, Clone)]
pub struct SaveAnswersCommand {
    pub user_id: UserId,
    pub answers: HashMap<String, Option<bool>>,
}

/// Handler for saving checklist answers.
pub struct SaveAnswersHandler {
    answer_store: Arc<dyn DetailAnswerStore>,
}

impl SaveAnswersHandler {
    pub fn new(answer_store: Arc<dyn DetailAnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(&self, command: SaveAnswersCommand) -> Result<(), AnswerStoreError> {
        validate_submission(&command.answers)?;
        self.answer_store
            .save_boolean_answers(command.user_id, &command.answers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::catalog::{detail_questions, SubmissionError};

    struct RecordingStore {
        saved: Mutex<Option<HashMap<String, Option<bool>>>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl DetailAnswerStore for RecordingStore {
        async fn get_boolean_answers(
            &self,
            _user_id: UserId,
        ) -> Result<HashMap<String, Option<bool>>, AnswerStoreError> {
            unimplemented!()
        }

        async fn save_boolean_answers(
            &self,
            _user_id: UserId,
            answers: &HashMap<String, Option<bool>>,
        ) -> Result<(), AnswerStoreError> {
            *self.saved.lock().unwrap() = Some(answers.clone());
            Ok(())
        }
    }

    fn full_submission() -> HashMap<String, Option<bool>> {
        detail_questions()
            .iter()
            .map(|q| (q.code.to_string(), Some(false)))
            .collect()
    }

    #[tokio::test]
    async fn full_submission_is_saved() {
        let store = Arc::new(RecordingStore::new());
        let handler = SaveAnswersHandler::new(store.clone());

        handler
            .handle(SaveAnswersCommand {
                user_id: UserId::new(1),
                answers: full_submission(),
            })
            .await
            .unwrap();

        assert!(store.saved.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn unknown_code_is_rejected_before_storage() {
        let store = Arc::new(RecordingStore::new());
        let handler = SaveAnswersHandler::new(store.clone());

        let mut answers = full_submission();
        answers.insert("bogus_q9".to_string(), Some(true));

        let err = handler
            .handle(SaveAnswersCommand {
                user_id: UserId::new(1),
                answers,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnswerStoreError::Rejected(SubmissionError::UnknownQuestions { .. })
        ));
        assert!(store.saved.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn incomplete_submission_is_rejected_before_storage() {
        let store = Arc::new(RecordingStore::new());
        let handler = SaveAnswersHandler::new(store.clone());

        let mut answers = full_submission();
        answers.insert("concept_q1".to_string(), None);

        let err = handler
            .handle(SaveAnswersCommand {
                user_id: UserId::new(1),
                answers,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnswerStoreError::Rejected(SubmissionError::Incomplete {
                answered: 23,
                required: 24
            })
        ));
        assert!(store.saved.lock().unwrap().is_none());
    }
}
