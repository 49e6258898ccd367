//! HTTP DTOs for the deep-dive endpoints.

use serde::Deserialize;

pub use crate::adapters::http::ErrorResponse;
pub use crate::application::handlers::deep_dive::{
    CardView, CompleteCardResult, GetChatResult, SendMessageResult, StepView,
};
pub use crate::domain::scoring::AxisScoreResult;

/// POST body for one chat turn.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}
