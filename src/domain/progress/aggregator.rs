//! Combines per-axis scores into the dashboard view and picks the one axis
//! the user should focus on next.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::catalog::{detail_questions, Axis, TOTAL_DETAIL_QUESTIONS};
use crate::domain::scoring::{score_checklist_axis, AxisScoreResult};

/// Threshold below which an axis is a candidate for next focus even when
/// fully answered.
const FOCUS_SCORE_LINE: f64 = 7.0;

/// Flat answered/total counts across the whole 24-question checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailProgress {
    pub answered: usize,
    pub total: usize,
}

/// The single axis most in need of attention. Recomputed per dashboard
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextFocus {
    pub axis_code: String,
    pub axis_name: String,
    pub reason: String,
    pub message: String,
}

/// Scores every axis in dashboard order from one answer snapshot.
///
/// `axis_names` holds display-name overrides from reference data; a missing
/// entry falls back to the catalog default. An axis without question
/// definitions is a configuration error: it is logged and reported as a
/// zeroed entry so the rest of the dashboard still renders.
pub fn calculate_axis_scores(
    answers: &HashMap<String, Option<bool>>,
    axis_names: &HashMap<String, String>,
) -> Vec<AxisScoreResult> {
    Axis::ALL
        .iter()
        .map(|&axis| {
            let name = axis_names
                .get(axis.as_code())
                .cloned()
                .unwrap_or_else(|| axis.default_name().to_string());
            score_checklist_axis(axis, name.clone(), answers).unwrap_or_else(|err| {
                tracing::warn!(axis = %axis, error = %err, "axis skipped during scoring");
                AxisScoreResult::zeroed(axis, name)
            })
        })
        .collect()
}

/// Counts non-null boolean answers across the full checklist.
pub fn calculate_detail_progress(answers: &HashMap<String, Option<bool>>) -> DetailProgress {
    let answered = detail_questions()
        .iter()
        .filter(|q| matches!(answers.get(q.code), Some(Some(_))))
        .count();
    DetailProgress {
        answered,
        total: TOTAL_DETAIL_QUESTIONS,
    }
}

/// Picks the axis most in need of attention.
///
/// Candidates are axes with unanswered questions or a score below 7.0.
/// The largest missing count wins; ties break toward the lowest score.
/// When every axis is complete and at or above 7.0 there is no next focus.
pub fn pick_next_focus(axis_scores: &[AxisScoreResult]) -> Option<NextFocus> {
    let target = axis_scores
        .iter()
        .filter(|a| a.missing > 0 || a.score < FOCUS_SCORE_LINE)
        .min_by(|a, b| {
            b.missing
                .cmp(&a.missing)
                .then(a.score.total_cmp(&b.score))
        })?;

    let reason = if target.missing > 0 {
        format!(
            "{} still has {} items unanswered.",
            target.name, target.missing
        )
    } else {
        format!("{} score is {:.1}, somewhat low.", target.name, target.score)
    };

    Some(NextFocus {
        axis_code: target.code.clone(),
        axis_name: target.name.clone(),
        reason,
        message: target.next_step.clone(),
    })
}
