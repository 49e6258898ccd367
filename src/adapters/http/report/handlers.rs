//! HTTP handlers for the report endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::report::{GenerateReportHandler, GenerateReportQuery};
use crate::ports::{AiProvider, DeepDiveStore, DeepDiveStoreError};

use super::dto::{ErrorResponse, ReportView};

/// Report API error that implements IntoResponse.
pub enum ReportApiError {
    Internal(String),
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> axum::response::Response {
        let ReportApiError::Internal(msg) = self;
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response()
    }
}

impl From<DeepDiveStoreError> for ReportApiError {
    fn from(error: DeepDiveStoreError) -> Self {
        let DeepDiveStoreError::Database(msg) = error;
        ReportApiError::Internal(format!("Database error: {msg}"))
    }
}

/// Shared state for the report route.
#[derive(Clone)]
pub struct ReportAppState {
    pub store: Arc<dyn DeepDiveStore>,
    pub ai: Arc<dyn AiProvider>,
}

impl ReportAppState {
    pub fn generate_report_handler(&self) -> GenerateReportHandler {
        GenerateReportHandler::new(self.store.clone(), self.ai.clone())
    }
}

/// GET /api/report
///
/// Assembles the business-plan document from completed card summaries.
pub async fn generate_report(
    State(state): State<ReportAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ReportView>, ReportApiError> {
    let handler = state.generate_report_handler();
    let report = handler
        .handle(GenerateReportQuery {
            user_id: user.user_id,
        })
        .await?;
    Ok(Json(report))
}
