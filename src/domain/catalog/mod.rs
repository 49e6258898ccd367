//! Static reference data: planning axes, detail questions, deep-dive cards.
//!
//! All catalog data is fixed at compile time and seeded to the database for
//! display purposes only; the in-process catalog is the source of truth.

mod axis;
mod deep_dive;
mod detail_questions;

pub use axis::{Axis, OK_LINE, GROWTH_ZONE};
pub use deep_dive::{deep_dive_steps, find_card, DeepDiveCardDef, DeepDiveStepDef};
pub use detail_questions::{
    detail_questions, detail_questions_for_axis, validate_submission, DetailQuestionDef,
    SubmissionError, TOTAL_DETAIL_QUESTIONS,
};
