//! End-to-end flows over in-memory stores.
//!
//! Exercises the wiring from checklist submission through dashboard
//! aggregation, deep-dive coaching, and report assembly, with the same
//! handler composition the HTTP layer uses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use kaigyo_navi::application::handlers::dashboard::{
    GetDashboardHandler, GetDashboardQuery, UpdateOwnerNoteCommand, UpdateOwnerNoteHandler,
};
use kaigyo_navi::application::handlers::deep_dive::{
    CompleteCardCommand, CompleteCardHandler, GetCardListHandler, GetCardListQuery, GetChatHandler,
    GetChatQuery, GetProgressHandler, GetProgressQuery, SendMessageCommand, SendMessageHandler,
};
use kaigyo_navi::application::handlers::detail_questions::{SaveAnswersCommand, SaveAnswersHandler};
use kaigyo_navi::application::handlers::report::{
    GenerateReportHandler, GenerateReportQuery, ReportSource,
};
use kaigyo_navi::domain::catalog::{detail_questions, validate_submission, Axis};
use kaigyo_navi::domain::deep_dive::{CardEngagement, CardStatus, ChatMessage, ChatRole};
use kaigyo_navi::domain::foundation::UserId;
use kaigyo_navi::domain::scoring::AxisScoreResult;
use kaigyo_navi::ports::{
    AiError, AiProvider, AnswerStoreError, AxisMetaReader, CardProgress, CompletionRequest,
    DeepDiveStore, DeepDiveStoreError, DetailAnswerStore, NoteStoreError, OwnerNoteStore,
    ScoreSnapshotWriter, SnapshotError,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Default)]
struct InMemoryAnswerStore {
    answers: Mutex<HashMap<String, Option<bool>>>,
}

#[async_trait]
impl DetailAnswerStore for InMemoryAnswerStore {
    async fn get_boolean_answers(
        &self,
        _user_id: UserId,
    ) -> Result<HashMap<String, Option<bool>>, AnswerStoreError> {
        Ok(self.answers.lock().unwrap().clone())
    }

    async fn save_boolean_answers(
        &self,
        _user_id: UserId,
        answers: &HashMap<String, Option<bool>>,
    ) -> Result<(), AnswerStoreError> {
        validate_submission(answers)?;
        *self.answers.lock().unwrap() = answers.clone();
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryDeepDiveStore {
    chats: Mutex<HashMap<String, Vec<ChatMessage>>>,
    progress: Mutex<HashMap<String, CardProgress>>,
}

#[async_trait]
impl DeepDiveStore for InMemoryDeepDiveStore {
    async fn get_card_engagements(
        &self,
        _user_id: UserId,
        _axis: Axis,
    ) -> Result<HashMap<String, CardEngagement>, DeepDiveStoreError> {
        let chats = self.chats.lock().unwrap();
        let progress = self.progress.lock().unwrap();
        let mut engagements: HashMap<String, CardEngagement> = HashMap::new();
        for (card_id, history) in chats.iter() {
            engagements.entry(card_id.clone()).or_default().chat_history = history.clone();
        }
        for (card_id, row) in progress.iter() {
            let engagement = engagements.entry(card_id.clone()).or_default();
            engagement.summary = row.summary.clone();
            engagement.is_completed = row.status == CardStatus::Completed;
        }
        Ok(engagements)
    }

    async fn get_axis_progress(
        &self,
        _user_id: UserId,
        _axis: Axis,
    ) -> Result<HashMap<String, CardProgress>, DeepDiveStoreError> {
        Ok(self.progress.lock().unwrap().clone())
    }

    async fn get_chat(
        &self,
        _user_id: UserId,
        card_id: &str,
    ) -> Result<Vec<ChatMessage>, DeepDiveStoreError> {
        Ok(self
            .chats
            .lock()
            .unwrap()
            .get(card_id)
            .cloned()
            .unwrap_or_default())
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
        card_id: &str,
        role: ChatRole,
        message: &str,
    ) -> Result<ChatMessage, DeepDiveStoreError> {
        let stored = ChatMessage::new(role, message, Utc::now());
        self.chats
            .lock()
            .unwrap()
            .entry(card_id.to_string())
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    async fn mark_in_progress(
        &self,
        _user_id: UserId,
        _axis: Axis,
        card_id: &str,
    ) -> Result<(), DeepDiveStoreError> {
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
        card_id: &str,
        summary: &str,
    ) -> Result<CardProgress, DeepDiveStoreError> {
        let row = CardProgress {
            status: CardStatus::Completed,
            summary: Some(summary.to_string()),
        };
        self.progress
            .lock()
            .unwrap()
            .insert(card_id.to_string(), row.clone());
        Ok(row)
    }
}

struct NoOverrides;

#[async_trait]
impl AxisMetaReader for NoOverrides {
    async fn axis_names(&self, _user_id: UserId) -> HashMap<String, String> {
        HashMap::new()
    }
}

#[derive(Default)]
struct InMemoryNoteStore {
    note: Mutex<Option<String>>,
}

#[async_trait]
impl OwnerNoteStore for InMemoryNoteStore {
    async fn get_note(&self, _user_id: UserId) -> Result<Option<String>, NoteStoreError> {
        Ok(self.note.lock().unwrap().clone())
    }

    async fn save_note(&self, _user_id: UserId, content: &str) -> Result<String, NoteStoreError> {
        *self.note.lock().unwrap() = Some(content.to_string());
        Ok(content.to_string())
    }
}

#[derive(Default)]
struct RecordingSnapshotWriter {
    persisted: Mutex<Vec<AxisScoreResult>>,
}

#[async_trait]
impl ScoreSnapshotWriter for RecordingSnapshotWriter {
    async fn persist_scores(
        &self,
        _user_id: UserId,
        scores: &[AxisScoreResult],
    ) -> Result<(), SnapshotError> {
        self.persisted.lock().unwrap().extend_from_slice(scores);
        Ok(())
    }
}

struct ScriptedAi {
    reply: Option<String>,
}

#[async_trait]
impl AiProvider for ScriptedAi {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, AiError> {
        self.reply
            .clone()
            .ok_or_else(|| AiError::unavailable("offline"))
    }
}

fn user() -> UserId {
    UserId::new(1)
}

fn full_submission(value: bool) -> HashMap<String, Option<bool>> {
    detail_questions()
        .iter()
        .map(|q| (q.code.to_string(), Some(value)))
        .collect()
}

// =============================================================================
// Checklist and dashboard
// =============================================================================

#[tokio::test]
async fn checklist_submission_flows_into_the_dashboard() {
    let answer_store = Arc::new(InMemoryAnswerStore::default());
    let note_store = Arc::new(InMemoryNoteStore::default());
    let snapshot_writer = Arc::new(RecordingSnapshotWriter::default());

    // Everything checked except the three menu questions, answered "no".
    let mut answers = full_submission(true);
    for code in ["menu_q1", "menu_q2", "menu_q3"] {
        answers.insert(code.to_string(), Some(false));
    }

    SaveAnswersHandler::new(answer_store.clone())
        .handle(SaveAnswersCommand {
            user_id: user(),
            answers,
        })
        .await
        .unwrap();

    UpdateOwnerNoteHandler::new(note_store.clone())
        .handle(UpdateOwnerNoteCommand {
            user_id: user(),
            content: "Shortlist two locations by Friday.".to_string(),
        })
        .await
        .unwrap();

    let dashboard = GetDashboardHandler::new(
        answer_store,
        Arc::new(NoOverrides),
        note_store,
        snapshot_writer.clone(),
    )
    .handle(GetDashboardQuery { user_id: user() })
    .await
    .unwrap();

    assert_eq!(dashboard.detail_progress.answered, 24);
    let menu = dashboard
        .axis_scores
        .iter()
        .find(|s| s.code == "menu")
        .unwrap();
    assert_eq!(menu.score, 0.0);
    assert_eq!(menu.missing, 0);

    // All answered, so the focus falls on the lowest score.
    let focus = dashboard.next_focus.unwrap();
    assert_eq!(focus.axis_code, "menu");
    assert!(focus.reason.contains("somewhat low"));

    assert_eq!(dashboard.owner_note, "Shortlist two locations by Friday.");
    assert_eq!(snapshot_writer.persisted.lock().unwrap().len(), 8);
}

#[tokio::test]
async fn rejected_submission_leaves_storage_untouched() {
    let answer_store = Arc::new(InMemoryAnswerStore::default());
    let handler = SaveAnswersHandler::new(answer_store.clone());

    let mut incomplete = full_submission(true);
    incomplete.insert("funds_q2".to_string(), None);

    let result = handler
        .handle(SaveAnswersCommand {
            user_id: user(),
            answers: incomplete,
        })
        .await;
    assert!(result.is_err());
    assert!(answer_store.answers.lock().unwrap().is_empty());
}

// =============================================================================
// Deep dive
// =============================================================================

#[tokio::test]
async fn coaching_a_card_moves_list_progress_and_score() {
    let store = Arc::new(InMemoryDeepDiveStore::default());
    let ai = Arc::new(ScriptedAi {
        reply: Some("Interesting. What makes it unique?".to_string()),
    });

    SendMessageHandler::new(store.clone(), ai.clone())
        .handle(SendMessageCommand {
            user_id: user(),
            card_id: "concept_1_1".to_string(),
            message: "A bistro where regulars feel at home.".to_string(),
        })
        .await
        .unwrap();

    let steps = GetCardListHandler::new(store.clone())
        .handle(GetCardListQuery {
            user_id: user(),
            axis_code: "concept".to_string(),
        })
        .await
        .unwrap();
    let card = &steps[0].cards[0];
    assert_eq!(card.status, CardStatus::InProgress);

    let completion = CompleteCardHandler::new(store.clone(), ai)
        .handle(CompleteCardCommand {
            user_id: user(),
            card_id: "concept_1_1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(completion.status, CardStatus::Completed);

    // One engaged card out of eleven.
    let progress = GetProgressHandler::new(store, Arc::new(NoOverrides))
        .handle(GetProgressQuery {
            user_id: user(),
            axis_code: "concept".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(progress.answered, 1);
    assert_eq!(progress.total_questions, 11);
    assert_eq!(progress.score, 0.9);
}

#[tokio::test]
async fn opening_a_chat_starts_the_card() {
    let store = Arc::new(InMemoryDeepDiveStore::default());

    let chat = GetChatHandler::new(store.clone())
        .handle(GetChatQuery {
            user_id: user(),
            card_id: "concept_1_2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(chat.status, CardStatus::InProgress);
    assert!(chat.messages.is_empty());

    let steps = GetCardListHandler::new(store)
        .handle(GetCardListQuery {
            user_id: user(),
            axis_code: "concept".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(steps[0].cards[1].status, CardStatus::InProgress);
}

#[tokio::test]
async fn completing_step_one_unlocks_step_two() {
    let store = Arc::new(InMemoryDeepDiveStore::default());
    let ai = Arc::new(ScriptedAi {
        reply: Some("Noted.".to_string()),
    });
    let complete = CompleteCardHandler::new(store.clone(), ai);

    for card_id in ["concept_1_1", "concept_1_2", "concept_1_3", "concept_1_4"] {
        complete
            .handle(CompleteCardCommand {
                user_id: user(),
                card_id: card_id.to_string(),
            })
            .await
            .unwrap();
    }

    let steps = GetCardListHandler::new(store)
        .handle(GetCardListQuery {
            user_id: user(),
            axis_code: "concept".to_string(),
        })
        .await
        .unwrap();
    assert!(steps[0].unlocked);
    assert!(steps[1].unlocked);
    assert!(!steps[2].unlocked);
}

// =============================================================================
// Report
// =============================================================================

#[tokio::test]
async fn completed_summaries_reach_the_report_draft() {
    let store = Arc::new(InMemoryDeepDiveStore::default());
    store
        .complete_card(user(), Axis::Concept, "concept_1_1", "A bistro for locals.")
        .await
        .unwrap();

    // Provider offline: the deterministic draft ships.
    let report = GenerateReportHandler::new(store, Arc::new(ScriptedAi { reply: None }))
        .handle(GenerateReportQuery { user_id: user() })
        .await
        .unwrap();

    assert_eq!(report.source, ReportSource::Draft);
    assert!(report.markdown.contains("A bistro for locals."));
    assert!(report.markdown.contains("(not yet drafted)"));
}
