//! The derived score projection for one axis.

use serde::Serialize;
use thiserror::Error;

use crate::domain::catalog::{Axis, GROWTH_ZONE, OK_LINE};

/// Derived score and guidance for one axis.
///
/// Always a projection of the live answer store, recomputed on every read.
/// May be persisted as a snapshot side effect but is never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScoreResult {
    pub code: String,
    pub name: String,
    /// 0.0 to 10.0, one decimal place.
    pub score: f64,
    pub ok_line: f64,
    pub growth_zone: f64,
    pub answered: usize,
    pub total_questions: usize,
    pub missing: usize,
    pub comment: String,
    pub next_step: String,
}

impl AxisScoreResult {
    /// Builds the result for an axis, deriving comment and next-step text
    /// from the score and missing count.
    pub(crate) fn build(
        axis: Axis,
        name: impl Into<String>,
        score: f64,
        answered: usize,
        total_questions: usize,
        missing: usize,
    ) -> Self {
        Self {
            code: axis.as_code().to_string(),
            name: name.into(),
            score,
            ok_line: OK_LINE,
            growth_zone: GROWTH_ZONE,
            answered,
            total_questions,
            missing,
            comment: comment_for(score, missing),
            next_step: next_step_for(axis, missing),
        }
    }

    /// A zeroed entry for an axis whose question definitions are missing.
    /// Used so a configuration error never breaks whole-dashboard scoring.
    pub fn zeroed(axis: Axis, name: impl Into<String>) -> Self {
        Self::build(axis, name, 0.0, 0, 0, 0)
    }
}

/// Errors from the scoring engine.
///
/// Missing *answers* are never an error (they score as zero); only missing
/// reference data is, and the aggregator recovers from it per axis.
#[derive(Debug, Clone, Error)]
pub enum ScoringError {
    #[error("axis '{axis}' has no question definitions")]
    MissingQuestionDefinitions { axis: Axis },
}

/// Rounds to one decimal place, the precision of every published score.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn comment_for(score: f64, missing: usize) -> String {
    let text = if missing > 0 {
        "Some questions are unanswered, so this is an estimated score. Fill in all three first."
    } else if score >= 8.0 {
        "On track. Keep polishing this strength."
    } else if score >= OK_LINE {
        "Near the OK line. Reinforce one weak spot."
    } else if score >= 3.0 {
        "The direction is visible. Make the numbers and flow concrete."
    } else {
        "Still mostly blank. Start by lining up the basic yeses."
    };
    text.to_string()
}

fn next_step_for(axis: Axis, missing: usize) -> String {
    let hint = axis.next_step_hint();
    if missing > 0 {
        format!("Fill in the unanswered questions first, then: {hint}")
    } else {
        hint.to_string()
    }
}
