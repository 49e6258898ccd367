//! ListQuestionsHandler - the checklist catalog grouped by axis.
//!
//! The catalog itself is static; only the axis display names are per-user.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::catalog::{detail_questions_for_axis, Axis};
use crate::domain::foundation::UserId;
use crate::ports::AxisMetaReader;

/// Query for the question catalog.
#[derive(Debug, Clone)]
pub struct ListQuestionsQuery {
    pub user_id: UserId,
}

/// One checklist question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub code: String,
    pub text: String,
}

/// Questions of one axis, under the user's display name for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisQuestionGroup {
    pub axis_code: String,
    pub axis_name: String,
    pub questions: Vec<QuestionView>,
}

pub type ListQuestionsResult = Vec<AxisQuestionGroup>;

/// Handler for listing the checklist catalog.
pub struct ListQuestionsHandler {
    axis_meta: Arc<dyn AxisMetaReader>,
}

impl ListQuestionsHandler {
    pub fn new(axis_meta: Arc<dyn AxisMetaReader>) -> Self {
        Self { axis_meta }
    }

    pub async fn handle(&self, query: ListQuestionsQuery) -> ListQuestionsResult {
        let overrides = self.axis_meta.axis_names(query.user_id).await;
        Axis::ALL
            .iter()
            .map(|&axis| {
                let axis_name = overrides
                    .get(axis.as_code())
                    .cloned()
                    .unwrap_or_else(|| axis.default_name().to_string());
                AxisQuestionGroup {
                    axis_code: axis.as_code().to_string(),
                    axis_name,
                    questions: detail_questions_for_axis(axis)
                        .iter()
                        .map(|q| QuestionView {
                            code: q.code.to_string(),
                            text: q.text.to_string(),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}
