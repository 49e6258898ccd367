//! HTTP routes for the report endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{generate_report, ReportAppState};

/// Creates the report router.
pub fn report_routes(state: ReportAppState) -> Router {
    Router::new()
        .route("/api/report", get(generate_report))
        .with_state(state)
}
