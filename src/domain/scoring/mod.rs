//! Axis scoring engine.
//!
//! Two regimes coexist: the weighted boolean checklist used for detail
//! questions, and the completion ratio used for deep-dive cards. Both are
//! pure functions of an answer snapshot and both produce [`AxisScoreResult`].

mod checklist;
mod engagement;
mod result;

pub use checklist::score_checklist_axis;
pub use engagement::score_engagement_axis;
pub use result::{AxisScoreResult, ScoringError};
