//! Completion-ratio scoring (deep-dive cards).

use std::collections::HashMap;

use crate::domain::catalog::{deep_dive_steps, Axis};
use crate::domain::deep_dive::CardEngagement;

use super::result::round1;
use super::AxisScoreResult;

/// Scores an axis from how many of its deep-dive cards the user engaged.
///
/// Engagement is defined by [`CardEngagement::is_engaged`]. An axis with no
/// authored cards scores 0.0 with a total of 0; there is no division by
/// zero and no error.
pub fn score_engagement_axis(
    axis: Axis,
    name: impl Into<String>,
    engagements: &HashMap<String, CardEngagement>,
) -> AxisScoreResult {
    let card_ids: Vec<&str> = deep_dive_steps(axis)
        .iter()
        .flat_map(|step| step.cards.iter().map(|c| c.id))
        .collect();

    let total = card_ids.len();
    if total == 0 {
        return AxisScoreResult::zeroed(axis, name);
    }

    let answered = card_ids
        .iter()
        .filter(|id| engagements.get(**id).is_some_and(|e| e.is_engaged()))
        .count();
    let score = round1(answered as f64 / total as f64 * 10.0);
    let missing = total.saturating_sub(answered);

    AxisScoreResult::build(axis, name, score, answered, total, missing)
}
