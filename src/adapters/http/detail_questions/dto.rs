//! HTTP DTOs for the detail-question endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use crate::adapters::http::ErrorResponse;
pub use crate::application::handlers::detail_questions::AxisQuestionGroup;

/// PUT body for a full checklist submission.
#[derive(Debug, Deserialize)]
pub struct SaveAnswersRequest {
    pub answers: HashMap<String, Option<bool>>,
}

/// Stored answers, keyed by question code.
#[derive(Debug, Serialize)]
pub struct AnswersResponse {
    pub answers: HashMap<String, Option<bool>>,
}
