//! Static deep-dive card catalog.
//!
//! Cards are grouped into ordered steps per axis. Only the concept axis
//! ships with card data so far; other axes return an empty list until their
//! card sets are authored.

use once_cell::sync::Lazy;

use super::Axis;

/// A deep-dive conversation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepDiveCardDef {
    /// Stable id, `<axis>_<step>_<n>`.
    pub id: &'static str,
    pub title: &'static str,
    /// The AI-posed question that opens the conversation.
    pub initial_question: &'static str,
}

/// An ordered step of cards; later steps unlock once the previous step's
/// cards are all completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepDiveStepDef {
    pub step: u32,
    pub step_title: &'static str,
    pub cards: Vec<DeepDiveCardDef>,
}

static CONCEPT_STEPS: Lazy<Vec<DeepDiveStepDef>> = Lazy::new(|| {
    vec![
        DeepDiveStepDef {
            step: 1,
            step_title: "Introduction and worldview",
            cards: vec![
                DeepDiveCardDef {
                    id: "concept_1_1",
                    title: "Motivation & worldview",
                    initial_question:
                        "What kind of world do you want to bring to life through this restaurant?",
                },
                DeepDiveCardDef {
                    id: "concept_1_2",
                    title: "Target",
                    initial_question: "Which customers do you most want to make happy?",
                },
                DeepDiveCardDef {
                    id: "concept_1_3",
                    title: "Core value",
                    initial_question:
                        "What is the decisive reason a customer would choose your restaurant over any other?",
                },
                DeepDiveCardDef {
                    id: "concept_1_4",
                    title: "Restaurant type",
                    initial_question:
                        "Is your restaurant for everyday use, or for special occasions?",
                },
            ],
        },
        DeepDiveStepDef {
            step: 2,
            step_title: "Concretization and differentiation",
            cards: vec![
                DeepDiveCardDef {
                    id: "concept_2_1",
                    title: "Competitor analysis",
                    initial_question:
                        "List the competitors your target already uses. Where can your restaurant win?",
                },
                DeepDiveCardDef {
                    id: "concept_2_2",
                    title: "Offered experience",
                    initial_question:
                        "What is the most memorable moment a customer has during their time at your restaurant?",
                },
                DeepDiveCardDef {
                    id: "concept_2_3",
                    title: "Personality",
                    initial_question: "In one phrase, what kind of place is your restaurant?",
                },
                DeepDiveCardDef {
                    id: "concept_2_4",
                    title: "Customer relationships",
                    initial_question:
                        "How will you build the mechanisms that turn first-time visitors into regulars?",
                },
            ],
        },
        DeepDiveStepDef {
            step: 3,
            step_title: "Consistency and the future",
            cards: vec![
                DeepDiveCardDef {
                    id: "concept_3_1",
                    title: "Value consistency",
                    initial_question:
                        "Are your chosen target and core value consistent with each other?",
                },
                DeepDiveCardDef {
                    id: "concept_3_2",
                    title: "Message",
                    initial_question: "Come up with a one-line catchphrase for your restaurant.",
                },
                DeepDiveCardDef {
                    id: "concept_3_3",
                    title: "Outlook",
                    initial_question:
                        "If this concept succeeds, what brand do you want to grow into over the next three to five years?",
                },
            ],
        },
    ]
});

static NO_STEPS: Lazy<Vec<DeepDiveStepDef>> = Lazy::new(Vec::new);

/// Returns the deep-dive steps for an axis (empty when none are authored).
pub fn deep_dive_steps(axis: Axis) -> &'static [DeepDiveStepDef] {
    match axis {
        Axis::Concept => &CONCEPT_STEPS,
        _ => &NO_STEPS,
    }
}

/// Looks up a card by id across all axes, returning its axis as well.
pub fn find_card(card_id: &str) -> Option<(Axis, &'static DeepDiveCardDef)> {
    for axis in Axis::ALL {
        for step in deep_dive_steps(axis) {
            if let Some(card) = step.cards.iter().find(|c| c.id == card_id) {
                return Some((axis, card));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_has_three_steps_and_eleven_cards() {
        let steps = deep_dive_steps(Axis::Concept);
        assert_eq!(steps.len(), 3);
        let total: usize = steps.iter().map(|s| s.cards.len()).sum();
        assert_eq!(total, 11);
    }

    #[test]
    fn steps_are_numbered_sequentially() {
        let steps = deep_dive_steps(Axis::Concept);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step as usize, i + 1);
        }
    }

    #[test]
    fn unauthored_axes_have_no_cards() {
        assert!(deep_dive_steps(Axis::Menu).is_empty());
        assert!(deep_dive_steps(Axis::Equipment).is_empty());
    }

    #[test]
    fn find_card_resolves_id_and_axis() {
        let (axis, card) = find_card("concept_2_3").unwrap();
        assert_eq!(axis, Axis::Concept);
        assert_eq!(card.title, "Personality");
    }

    #[test]
    fn find_card_returns_none_for_unknown_id() {
        assert!(find_card("menu_9_9").is_none());
    }
}
