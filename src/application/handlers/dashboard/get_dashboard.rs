//! GetDashboardHandler - builds the eight-axis dashboard view.
//!
//! Reads checklist answers, axis name overrides, and the owner note, runs
//! the scoring core, then persists a score snapshot as a best-effort side
//! effect.

use std::sync::Arc;

use serde::Serialize;

use super::DashboardError;
use crate::domain::catalog::{GROWTH_ZONE, OK_LINE};
use crate::domain::foundation::UserId;
use crate::domain::progress::{
    calculate_axis_scores, calculate_detail_progress, pick_next_focus, DetailProgress, NextFocus,
};
use crate::domain::scoring::AxisScoreResult;
use crate::ports::{AxisMetaReader, DetailAnswerStore, OwnerNoteStore, ScoreSnapshotWriter};

/// Query to build the dashboard for a user.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
}

/// Aggregated dashboard view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDashboardResult {
    pub axis_scores: Vec<AxisScoreResult>,
    pub detail_progress: DetailProgress,
    pub next_focus: Option<NextFocus>,
    pub ok_line: f64,
    pub growth_zone: f64,
    pub owner_note: String,
}

/// Handler for the dashboard view.
pub struct GetDashboardHandler {
    answer_store: Arc<dyn DetailAnswerStore>,
    axis_meta: Arc<dyn AxisMetaReader>,
    note_store: Arc<dyn OwnerNoteStore>,
    snapshot_writer: Arc<dyn ScoreSnapshotWriter>,
}

impl GetDashboardHandler {
    pub fn new(
        answer_store: Arc<dyn DetailAnswerStore>,
        axis_meta: Arc<dyn AxisMetaReader>,
        note_store: Arc<dyn OwnerNoteStore>,
        snapshot_writer: Arc<dyn ScoreSnapshotWriter>,
    ) -> Self {
        Self {
            answer_store,
            axis_meta,
            note_store,
            snapshot_writer,
        }
    }

    pub async fn handle(
        &self,
        query: GetDashboardQuery,
    ) -> Result<GetDashboardResult, DashboardError> {
        let answers = self.answer_store.get_boolean_answers(query.user_id).await?;
        let names = self.axis_meta.axis_names(query.user_id).await;
        let owner_note = self
            .note_store
            .get_note(query.user_id)
            .await?
            .unwrap_or_default();

        let axis_scores = calculate_axis_scores(&answers, &names);
        let detail_progress = calculate_detail_progress(&answers);
        let next_focus = pick_next_focus(&axis_scores);

        // Snapshot persistence must never fail the dashboard.
        if let Err(err) = self
            .snapshot_writer
            .persist_scores(query.user_id, &axis_scores)
            .await
        {
            tracing::warn!(user_id = %query.user_id, error = %err, "score snapshot write failed");
        }

        Ok(GetDashboardResult {
            axis_scores,
            detail_progress,
            next_focus,
            ok_line: OK_LINE,
            growth_zone: GROWTH_ZONE,
            owner_note,
        })
    }
}
