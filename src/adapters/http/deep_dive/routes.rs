//! HTTP routes for the deep-dive endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    complete_card, get_card_list, get_chat, get_progress, send_message, DeepDiveAppState,
};

/// Creates the deep-dive router.
pub fn deep_dive_routes(state: DeepDiveAppState) -> Router {
    Router::new()
        .route("/api/deep-dive/:axis_code/list", get(get_card_list))
        .route("/api/deep-dive/:axis_code/progress", get(get_progress))
        .route(
            "/api/deep-dive/chat/:card_id",
            get(get_chat).post(send_message),
        )
        .route("/api/deep-dive/card/:card_id/complete", post(complete_card))
        .with_state(state)
}
