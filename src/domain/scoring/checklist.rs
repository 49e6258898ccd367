//! Weighted-checklist scoring (detail questions).

use std::collections::HashMap;

use crate::domain::catalog::{detail_questions_for_axis, Axis};

use super::result::round1;
use super::{AxisScoreResult, ScoringError};

/// Each of an axis's three questions is replicated into a 10-slot
/// checkpoint vector. The first question carries the most weight because it
/// anchors the axis; all three are still required for a perfect score.
const CHECKPOINT_WEIGHTS: [usize; 3] = [4, 3, 3];

/// Scores one axis from the user's boolean answer snapshot.
///
/// A slot contributes 1.0 only for an explicit `true`; `false` and
/// unanswered both contribute 0.0. `missing` counts unanswered questions.
pub fn score_checklist_axis(
    axis: Axis,
    name: impl Into<String>,
    answers: &HashMap<String, Option<bool>>,
) -> Result<AxisScoreResult, ScoringError> {
    let questions = detail_questions_for_axis(axis);
    if questions.len() < CHECKPOINT_WEIGHTS.len() {
        return Err(ScoringError::MissingQuestionDefinitions { axis });
    }

    let total_slots: usize = CHECKPOINT_WEIGHTS.iter().sum();
    let mut filled_slots = 0usize;
    let mut answered = 0usize;
    for (question, weight) in questions.iter().zip(CHECKPOINT_WEIGHTS) {
        match answers.get(question.code).copied().flatten() {
            Some(true) => {
                filled_slots += weight;
                answered += 1;
            }
            Some(false) => answered += 1,
            None => {}
        }
    }

    let score = round1(filled_slots as f64 / total_slots as f64 * 10.0);
    let missing = questions.len().saturating_sub(answered);

    Ok(AxisScoreResult::build(
        axis,
        name,
        score,
        answered,
        questions.len(),
        missing,
    ))
}
