//! HTTP handlers for the dashboard endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::dashboard::{
    DashboardError, GetDashboardHandler, GetDashboardQuery, OwnerNoteError, UpdateOwnerNoteCommand,
    UpdateOwnerNoteHandler,
};
use crate::ports::{
    AxisMetaReader, DetailAnswerStore, OwnerNoteStore, ScoreSnapshotWriter,
};

use super::dto::{DashboardView, ErrorResponse, OwnerNoteRequest, OwnerNoteResponse};

/// Dashboard API error that implements IntoResponse.
pub enum DashboardApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for DashboardApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DashboardApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DashboardApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(msg),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<DashboardError> for DashboardApiError {
    fn from(error: DashboardError) -> Self {
        // Reads never hit the submission checks; everything left is storage.
        DashboardApiError::Internal(error.to_string())
    }
}

impl From<OwnerNoteError> for DashboardApiError {
    fn from(error: OwnerNoteError) -> Self {
        match error {
            OwnerNoteError::Empty | OwnerNoteError::TooLong => {
                DashboardApiError::BadRequest(error.to_string())
            }
            OwnerNoteError::Store(err) => DashboardApiError::Internal(err.to_string()),
        }
    }
}

/// Shared state for dashboard routes.
#[derive(Clone)]
pub struct DashboardAppState {
    pub answer_store: Arc<dyn DetailAnswerStore>,
    pub axis_meta: Arc<dyn AxisMetaReader>,
    pub note_store: Arc<dyn OwnerNoteStore>,
    pub snapshot_writer: Arc<dyn ScoreSnapshotWriter>,
}

impl DashboardAppState {
    pub fn get_dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(
            self.answer_store.clone(),
            self.axis_meta.clone(),
            self.note_store.clone(),
            self.snapshot_writer.clone(),
        )
    }

    pub fn update_owner_note_handler(&self) -> UpdateOwnerNoteHandler {
        UpdateOwnerNoteHandler::new(self.note_store.clone())
    }
}

/// GET /api/dashboard
///
/// Returns the eight-axis score overview with checklist progress, the
/// suggested next focus, the owner note, and the caller's email.
pub async fn get_dashboard(
    State(state): State<DashboardAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DashboardView>, DashboardApiError> {
    let handler = state.get_dashboard_handler();
    let overview = handler
        .handle(GetDashboardQuery {
            user_id: user.user_id,
        })
        .await?;
    Ok(Json(DashboardView {
        user_email: user.email,
        overview,
    }))
}

/// PUT /api/dashboard/owner-note
///
/// Replaces the owner's free-form note.
pub async fn upsert_owner_note(
    State(state): State<DashboardAppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<OwnerNoteRequest>,
) -> Result<Json<OwnerNoteResponse>, DashboardApiError> {
    let handler = state.update_owner_note_handler();
    let result = handler
        .handle(UpdateOwnerNoteCommand {
            user_id: user.user_id,
            content: body.content,
        })
        .await?;
    Ok(Json(result))
}
