//! GenerateReportHandler - assembles the business plan from card summaries.
//!
//! Summaries of completed cards feed the section assembler; the provider
//! rewrites the draft into a polished document, and the deterministic draft
//! ships as-is when the provider is down.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::catalog::{deep_dive_steps, Axis};
use crate::domain::deep_dive::CardStatus;
use crate::domain::foundation::UserId;
use crate::domain::report::{
    assemble_sections, draft_markdown, report_user_prompt, REPORT_SYSTEM_PROMPT,
};
use crate::ports::{AiProvider, CompletionRequest, DeepDiveStore, DeepDiveStoreError, MessageRole};

const REPORT_MAX_TOKENS: u32 = 2000;
const REPORT_TEMPERATURE: f32 = 0.4;

/// Query to generate the user's business-plan report.
#[derive(Debug, Clone)]
pub struct GenerateReportQuery {
    pub user_id: UserId,
}

/// How the returned document was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    Ai,
    Draft,
}

/// The assembled report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportResult {
    pub markdown: String,
    pub source: ReportSource,
}

/// Handler for report generation.
pub struct GenerateReportHandler {
    store: Arc<dyn DeepDiveStore>,
    ai: Arc<dyn AiProvider>,
}

impl GenerateReportHandler {
    pub fn new(store: Arc<dyn DeepDiveStore>, ai: Arc<dyn AiProvider>) -> Self {
        Self { store, ai }
    }

    pub async fn handle(
        &self,
        query: GenerateReportQuery,
    ) -> Result<GenerateReportResult, DeepDiveStoreError> {
        let summaries = self.collect_summaries(query.user_id).await?;
        let sections = assemble_sections(&summaries);
        let draft = draft_markdown(&sections);

        let request = CompletionRequest::new()
            .with_system_prompt(REPORT_SYSTEM_PROMPT)
            .with_message(MessageRole::User, report_user_prompt(&sections))
            .with_max_tokens(REPORT_MAX_TOKENS)
            .with_temperature(REPORT_TEMPERATURE);

        match self.ai.complete(request).await {
            Ok(text) if !text.trim().is_empty() => Ok(GenerateReportResult {
                markdown: text,
                source: ReportSource::Ai,
            }),
            Ok(_) => Ok(GenerateReportResult {
                markdown: draft,
                source: ReportSource::Draft,
            }),
            Err(err) => {
                tracing::warn!(user_id = %query.user_id, error = %err, "report rewrite failed, returning draft");
                Ok(GenerateReportResult {
                    markdown: draft,
                    source: ReportSource::Draft,
                })
            }
        }
    }

    /// Completed-card summaries per axis, in catalog order.
    async fn collect_summaries(
        &self,
        user_id: UserId,
    ) -> Result<HashMap<String, Vec<String>>, DeepDiveStoreError> {
        let mut summaries: HashMap<String, Vec<String>> = HashMap::new();
        for axis in Axis::ALL {
            let steps = deep_dive_steps(axis);
            if steps.is_empty() {
                continue;
            }
            let progress = self.store.get_axis_progress(user_id, axis).await?;
            let texts: Vec<String> = steps
                .iter()
                .flat_map(|step| &step.cards)
                .filter_map(|card| progress.get(card.id))
                .filter(|p| p.status == CardStatus::Completed)
                .filter_map(|p| p.summary.clone())
                .collect();
            if !texts.is_empty() {
                summaries.insert(axis.as_code().to_string(), texts);
            }
        }
        Ok(summaries)
    }
}
