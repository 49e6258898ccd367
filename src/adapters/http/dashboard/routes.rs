//! HTTP routes for the dashboard endpoints.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{get_dashboard, upsert_owner_note, DashboardAppState};

/// Creates the dashboard router.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/owner-note", put(upsert_owner_note))
        .with_state(state)
}
