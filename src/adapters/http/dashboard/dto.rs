//! HTTP DTOs for the dashboard endpoints.

use serde::{Deserialize, Serialize};

pub use crate::adapters::http::ErrorResponse;
pub use crate::application::handlers::dashboard::UpdateOwnerNoteResult as OwnerNoteResponse;

use crate::application::handlers::dashboard::GetDashboardResult;

/// The dashboard payload: the aggregated overview plus the caller's email.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user_email: String,
    #[serde(flatten)]
    pub overview: GetDashboardResult,
}

/// PUT /api/dashboard/owner-note body.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerNoteRequest {
    pub content: String,
}
