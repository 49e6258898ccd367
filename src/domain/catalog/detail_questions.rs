//! The fixed detail-question checklist: exactly three questions per axis.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use super::Axis;

/// Total number of detail questions across all axes.
pub const TOTAL_DETAIL_QUESTIONS: usize = 24;

/// A single checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailQuestionDef {
    /// Stable code, `<axis>_q1..q3`.
    pub code: &'static str,
    pub axis: Axis,
    /// The statement the user marks as true or false.
    pub text: &'static str,
}

static DETAIL_QUESTIONS: Lazy<Vec<DetailQuestionDef>> = Lazy::new(|| {
    vec![
        DetailQuestionDef {
            code: "concept_q1",
            axis: Axis::Concept,
            text: "You can state in one sentence who you serve, in what scene, and what you offer",
        },
        DetailQuestionDef {
            code: "concept_q2",
            axis: Axis::Concept,
            text: "You have decided on a differentiation point and positioning against competitors",
        },
        DetailQuestionDef {
            code: "concept_q3",
            axis: Axis::Concept,
            text: "Price range and experience are consistent, and you can picture the ideal customer",
        },
        DetailQuestionDef {
            code: "funds_q1",
            axis: Axis::Funds,
            text: "You have a rough estimate of monthly sales (covers, average spend, turns)",
        },
        DetailQuestionDef {
            code: "funds_q2",
            axis: Axis::Funds,
            text: "You have estimates and reasoning for the main costs (ingredients, labor, fixed costs)",
        },
        DetailQuestionDef {
            code: "funds_q3",
            axis: Axis::Funds,
            text: "You understand your break-even point and cash-flow picture",
        },
        DetailQuestionDef {
            code: "compliance_q1",
            axis: Axis::Compliance,
            text: "You have sketched the initial investment and how to fund it (own capital, loans, subsidies)",
        },
        DetailQuestionDef {
            code: "compliance_q2",
            axis: Axis::Compliance,
            text: "You have checked the repayment plan against monthly cash-flow headroom",
        },
        DetailQuestionDef {
            code: "compliance_q3",
            axis: Axis::Compliance,
            text: "You have listed the major costs for equipment, interior work, and permits",
        },
        DetailQuestionDef {
            code: "operation_q1",
            axis: Axis::Operation,
            text: "You have mapped a concrete day of operations (hours, shifts, floor flow)",
        },
        DetailQuestionDef {
            code: "operation_q2",
            axis: Axis::Operation,
            text: "You have set the basic rules for hygiene, register, and reservations",
        },
        DetailQuestionDef {
            code: "operation_q3",
            axis: Axis::Operation,
            text: "You have simulated staffing for busy and quiet periods and know the risks",
        },
        DetailQuestionDef {
            code: "location_q1",
            axis: Axis::Location,
            text: "You have researched and compared candidate areas (foot traffic, competitors, rent)",
        },
        DetailQuestionDef {
            code: "location_q2",
            axis: Axis::Location,
            text: "You have verified that the rent-to-sales ratio is reasonable",
        },
        DetailQuestionDef {
            code: "location_q3",
            axis: Axis::Location,
            text: "You have organized property requirements around signage, flow, and visibility",
        },
        DetailQuestionDef {
            code: "equipment_q1",
            axis: Axis::Equipment,
            text: "You have an interior and exterior image that fits the concept (rough is fine)",
        },
        DetailQuestionDef {
            code: "equipment_q2",
            axis: Axis::Equipment,
            text: "You have sketched a simple layout for kitchen, seating, and storage",
        },
        DetailQuestionDef {
            code: "equipment_q3",
            axis: Axis::Equipment,
            text: "You know the equipment requirements and permit conditions",
        },
        DetailQuestionDef {
            code: "marketing_q1",
            axis: Axis::Marketing,
            text: "You have decided the customer-acquisition channels for pre-open through month one",
        },
        DetailQuestionDef {
            code: "marketing_q2",
            axis: Axis::Marketing,
            text: "You have designed a path for collecting reviews and word of mouth",
        },
        DetailQuestionDef {
            code: "marketing_q3",
            axis: Axis::Marketing,
            text: "You plan a repeat-visit mechanism (membership, messaging, stamp cards)",
        },
        DetailQuestionDef {
            code: "menu_q1",
            axis: Axis::Menu,
            text: "You have a working draft of your signature menu and pricing",
        },
        DetailQuestionDef {
            code: "menu_q2",
            axis: Axis::Menu,
            text: "You have costed the main menu items",
        },
        DetailQuestionDef {
            code: "menu_q3",
            axis: Axis::Menu,
            text: "You can concretely picture sourcing, prep, and service flow",
        },
    ]
});

/// Returns the full catalog in definition order.
pub fn detail_questions() -> &'static [DetailQuestionDef] {
    &DETAIL_QUESTIONS
}

/// Returns the questions of one axis in definition order.
pub fn detail_questions_for_axis(axis: Axis) -> Vec<&'static DetailQuestionDef> {
    DETAIL_QUESTIONS.iter().filter(|q| q.axis == axis).collect()
}

/// Errors rejected before any answers are written.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("unknown question codes: {}", codes.join(", "))]
    UnknownQuestions { codes: Vec<String> },

    #[error("all {required} detail questions must be answered before saving, got {answered}")]
    Incomplete { answered: usize, required: usize },
}

/// Validates a full-checklist submission.
///
/// Every code must be known, and every one of the 24 questions must carry a
/// non-null answer. The stored answer set is untouched when this fails.
pub fn validate_submission(
    answers: &HashMap<String, Option<bool>>,
) -> Result<(), SubmissionError> {
    let mut unknown: Vec<String> = answers
        .keys()
        .filter(|code| !DETAIL_QUESTIONS.iter().any(|q| q.code == code.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        return Err(SubmissionError::UnknownQuestions { codes: unknown });
    }

    let answered = DETAIL_QUESTIONS
        .iter()
        .filter(|q| matches!(answers.get(q.code), Some(Some(_))))
        .count();
    if answered < TOTAL_DETAIL_QUESTIONS {
        return Err(SubmissionError::Incomplete {
            answered,
            required: TOTAL_DETAIL_QUESTIONS,
        });
    }

    Ok(())
}
