//! HTTP handlers for the detail-question endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::detail_questions::{
    GetAnswersHandler, GetAnswersQuery, ListQuestionsHandler, ListQuestionsQuery,
    SaveAnswersCommand, SaveAnswersHandler,
};
use crate::domain::catalog::SubmissionError;
use crate::ports::{AnswerStoreError, AxisMetaReader, DetailAnswerStore};

use super::dto::{AnswersResponse, AxisQuestionGroup, ErrorResponse, SaveAnswersRequest};

/// Detail-question API error that implements IntoResponse.
pub enum DetailQuestionsApiError {
    BadRequest(String),
    UnknownQuestions(Vec<String>),
    Internal(String),
}

impl IntoResponse for DetailQuestionsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DetailQuestionsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DetailQuestionsApiError::UnknownQuestions(codes) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::unprocessable(
                    "Submission contains unknown question codes",
                    serde_json::json!(codes),
                ),
            ),
            DetailQuestionsApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(msg),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnswerStoreError> for DetailQuestionsApiError {
    fn from(error: AnswerStoreError) -> Self {
        match error {
            AnswerStoreError::Rejected(SubmissionError::UnknownQuestions { codes }) => {
                DetailQuestionsApiError::UnknownQuestions(codes)
            }
            AnswerStoreError::Rejected(err @ SubmissionError::Incomplete { .. }) => {
                DetailQuestionsApiError::BadRequest(err.to_string())
            }
            AnswerStoreError::Database(msg) => {
                DetailQuestionsApiError::Internal(format!("Database error: {msg}"))
            }
        }
    }
}

/// Shared state for detail-question routes.
#[derive(Clone)]
pub struct DetailQuestionsAppState {
    pub answer_store: Arc<dyn DetailAnswerStore>,
    pub axis_meta: Arc<dyn AxisMetaReader>,
}

impl DetailQuestionsAppState {
    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.axis_meta.clone())
    }

    pub fn get_answers_handler(&self) -> GetAnswersHandler {
        GetAnswersHandler::new(self.answer_store.clone())
    }

    pub fn save_answers_handler(&self) -> SaveAnswersHandler {
        SaveAnswersHandler::new(self.answer_store.clone())
    }
}

/// GET /api/detail-questions
///
/// Returns the checklist catalog grouped by axis.
pub async fn list_questions(
    State(state): State<DetailQuestionsAppState>,
    RequireAuth(user): RequireAuth,
) -> Json<Vec<AxisQuestionGroup>> {
    let handler = state.list_questions_handler();
    Json(
        handler
            .handle(ListQuestionsQuery {
                user_id: user.user_id,
            })
            .await,
    )
}

/// GET /api/detail-questions/answers
///
/// Returns the user's stored answers.
pub async fn get_answers(
    State(state): State<DetailQuestionsAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AnswersResponse>, DetailQuestionsApiError> {
    let handler = state.get_answers_handler();
    let answers = handler
        .handle(GetAnswersQuery {
            user_id: user.user_id,
        })
        .await?;
    Ok(Json(AnswersResponse { answers }))
}

/// PUT /api/detail-questions/answers
///
/// Saves a full checklist submission.
pub async fn save_answers(
    State(state): State<DetailQuestionsAppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<SaveAnswersRequest>,
) -> Result<StatusCode, DetailQuestionsApiError> {
    let handler = state.save_answers_handler();
    handler
        .handle(SaveAnswersCommand {
            user_id: user.user_id,
            answers: body.answers,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
