//! HTTP routes for the detail-question endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_answers, list_questions, save_answers, DetailQuestionsAppState};

/// Creates the detail-question router.
pub fn detail_questions_routes(state: DetailQuestionsAppState) -> Router {
    Router::new()
        .route("/api/detail-questions", get(list_questions))
        .route(
            "/api/detail-questions/answers",
            get(get_answers).put(save_answers),
        )
        .with_state(state)
}
