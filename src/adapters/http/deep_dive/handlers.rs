//! HTTP handlers for the deep-dive endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::deep_dive::{
    CompleteCardCommand, CompleteCardHandler, DeepDiveError, GetCardListHandler, GetCardListQuery,
    GetChatHandler, GetChatQuery, GetProgressHandler, GetProgressQuery, SendMessageCommand,
    SendMessageHandler, StepView,
};
use crate::ports::{AiProvider, AxisMetaReader, DeepDiveStore, DeepDiveStoreError};

use super::dto::{
    AxisScoreResult, CompleteCardResult, ErrorResponse, GetChatResult, SendMessageRequest,
    SendMessageResult,
};

/// Deep-dive API error that implements IntoResponse.
pub enum DeepDiveApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for DeepDiveApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DeepDiveApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DeepDiveApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Resource", &msg))
            }
            DeepDiveApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(msg),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<DeepDiveError> for DeepDiveApiError {
    fn from(error: DeepDiveError) -> Self {
        match error {
            DeepDiveError::UnknownAxis(code) => {
                DeepDiveApiError::NotFound(format!("axis {code}"))
            }
            DeepDiveError::UnknownCard(id) => DeepDiveApiError::NotFound(format!("card {id}")),
            DeepDiveError::Store(DeepDiveStoreError::Database(msg)) => {
                DeepDiveApiError::Internal(format!("Database error: {msg}"))
            }
        }
    }
}

/// Shared state for deep-dive routes.
#[derive(Clone)]
pub struct DeepDiveAppState {
    pub store: Arc<dyn DeepDiveStore>,
    pub axis_meta: Arc<dyn AxisMetaReader>,
    pub ai: Arc<dyn AiProvider>,
}

impl DeepDiveAppState {
    pub fn card_list_handler(&self) -> GetCardListHandler {
        GetCardListHandler::new(self.store.clone())
    }

    pub fn progress_handler(&self) -> GetProgressHandler {
        GetProgressHandler::new(self.store.clone(), self.axis_meta.clone())
    }

    pub fn chat_handler(&self) -> GetChatHandler {
        GetChatHandler::new(self.store.clone())
    }

    pub fn send_message_handler(&self) -> SendMessageHandler {
        SendMessageHandler::new(self.store.clone(), self.ai.clone())
    }

    pub fn complete_card_handler(&self) -> CompleteCardHandler {
        CompleteCardHandler::new(self.store.clone(), self.ai.clone())
    }
}

/// GET /api/deep-dive/:axis_code/list
///
/// Returns the axis's step ladder with per-card progress.
pub async fn get_card_list(
    State(state): State<DeepDiveAppState>,
    Path(axis_code): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<StepView>>, DeepDiveApiError> {
    let handler = state.card_list_handler();
    let steps = handler
        .handle(GetCardListQuery {
            user_id: user.user_id,
            axis_code,
        })
        .await?;
    Ok(Json(steps))
}

/// GET /api/deep-dive/:axis_code/progress
///
/// Returns the engagement-based score for the axis.
pub async fn get_progress(
    State(state): State<DeepDiveAppState>,
    Path(axis_code): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AxisScoreResult>, DeepDiveApiError> {
    let handler = state.progress_handler();
    let score = handler
        .handle(GetProgressQuery {
            user_id: user.user_id,
            axis_code,
        })
        .await?;
    Ok(Json(score))
}

/// GET /api/deep-dive/chat/:card_id
///
/// Returns a card's conversation history.
pub async fn get_chat(
    State(state): State<DeepDiveAppState>,
    Path(card_id): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<GetChatResult>, DeepDiveApiError> {
    let handler = state.chat_handler();
    let chat = handler
        .handle(GetChatQuery {
            user_id: user.user_id,
            card_id,
        })
        .await?;
    Ok(Json(chat))
}

/// POST /api/deep-dive/chat/:card_id
///
/// Sends one chat turn and returns the assistant reply.
pub async fn send_message(
    State(state): State<DeepDiveAppState>,
    Path(card_id): Path<String>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResult>, DeepDiveApiError> {
    if body.message.trim().is_empty() {
        return Err(DeepDiveApiError::BadRequest(
            "message must not be empty".to_string(),
        ));
    }

    let handler = state.send_message_handler();
    let result = handler
        .handle(SendMessageCommand {
            user_id: user.user_id,
            card_id,
            message: body.message,
        })
        .await?;
    Ok(Json(result))
}

/// POST /api/deep-dive/card/:card_id/complete
///
/// Completes a card and records its summary.
pub async fn complete_card(
    State(state): State<DeepDiveAppState>,
    Path(card_id): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<CompleteCardResult>, DeepDiveApiError> {
    let handler = state.complete_card_handler();
    let result = handler
        .handle(CompleteCardCommand {
            user_id: user.user_id,
            card_id,
        })
        .await?;
    Ok(Json(result))
}
