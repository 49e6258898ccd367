//! Turns per-axis deep-dive summaries into a business-plan document.
//!
//! The deterministic Markdown draft is both the prompt material for the AI
//! rewrite and the fallback returned when the provider is unavailable.

use std::collections::HashMap;

use crate::domain::catalog::Axis;

/// Placeholder for axes the user has not summarized yet.
const NOT_YET_DRAFTED: &str = "(not yet drafted)";

/// Section order of the assembled report. Differs from dashboard order:
/// the narrative reads concept-first, finances last.
pub const REPORT_AXIS_ORDER: [Axis; 8] = [
    Axis::Concept,
    Axis::Location,
    Axis::Menu,
    Axis::Marketing,
    Axis::Compliance,
    Axis::Funds,
    Axis::Operation,
    Axis::Equipment,
];

/// One axis's contribution to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub axis: Axis,
    pub heading: String,
    /// Joined card summaries, or None when the axis has none.
    pub body: Option<String>,
}

impl ReportSection {
    fn body_or_placeholder(&self) -> &str {
        self.body.as_deref().unwrap_or(NOT_YET_DRAFTED)
    }
}

/// Builds report sections from per-axis card summaries.
///
/// Empty summary strings are dropped; an axis with nothing left gets a
/// placeholder body so the report structure stays complete.
pub fn assemble_sections(summaries: &HashMap<String, Vec<String>>) -> Vec<ReportSection> {
    REPORT_AXIS_ORDER
        .iter()
        .map(|&axis| {
            let body = summaries
                .get(axis.as_code())
                .map(|texts| {
                    texts
                        .iter()
                        .filter(|t| !t.is_empty())
                        .cloned()
                        .collect::<Vec<_>>()
                        .join("\n\n")
                })
                .filter(|joined| !joined.is_empty());
            ReportSection {
                axis,
                heading: axis.default_name().to_string(),
                body,
            }
        })
        .collect()
}

/// Renders the deterministic Markdown draft of the plan.
pub fn draft_markdown(sections: &[ReportSection]) -> String {
    let mut out = String::from("# Business Plan\n");
    for section in sections {
        out.push_str(&format!(
            "\n## {}\n\n{}\n",
            section.heading,
            section.body_or_placeholder()
        ));
    }
    out
}

/// System prompt for the AI rewrite into an executive-summary document.
pub const REPORT_SYSTEM_PROMPT: &str = "\
You are a professional management consultant and copywriter. Produce a \
business-plan executive summary polished enough to hand to investors or a \
bank.

Role: merge the user's notes across eight planning axes into one coherent, \
compelling business-plan summary.

Output the following Markdown structure:
1. `# Business Plan: [store or concept name]` - extract the name from the \
concept notes.
2. `## Executive Summary` - roughly 300 words capturing the overall appeal.
3. `## Concept and Strengths` - merge concept, menu, and interior/exterior.
4. `## Market and Strategy` - merge location and marketing.
5. `## Operations and Execution` - build a concrete execution plan from the \
operations notes.
6. `## Financial Plan` - merge funding plan and revenue forecast; bold the \
key figures.

Tone: confident, logical business writing. Where input reads '(not yet \
drafted)', fold it in naturally as 'under consideration'. Keep the whole \
document a consistent story.";

/// User prompt carrying the section material for the AI rewrite.
pub fn report_user_prompt(sections: &[ReportSection]) -> String {
    let mut out = String::from(
        "Write the business plan from the following notes across the eight planning axes:\n",
    );
    for section in sections {
        out.push_str(&format!(
            "\n[{}]\n{}\n",
            section.heading,
            section.body_or_placeholder()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> HashMap<String, Vec<String>> {
        let mut map = HashMap::new();
        map.insert(
            "concept".to_string(),
            vec![
                "A locals-first bistro.".to_string(),
                "Weeknight comfort food.".to_string(),
            ],
        );
        map.insert("menu".to_string(), vec![String::new()]);
        map
    }

    #[test]
    fn sections_follow_report_order() {
        let sections = assemble_sections(&HashMap::new());
        assert_eq!(sections.len(), 8);
        assert_eq!(sections[0].axis, Axis::Concept);
        assert_eq!(sections[7].axis, Axis::Equipment);
    }

    #[test]
    fn card_summaries_are_joined_with_blank_lines() {
        let sections = assemble_sections(&summaries());
        let concept = &sections[0];
        assert_eq!(
            concept.body.as_deref(),
            Some("A locals-first bistro.\n\nWeeknight comfort food.")
        );
    }

    #[test]
    fn empty_summaries_fall_back_to_placeholder() {
        let sections = assemble_sections(&summaries());
        // Menu had only an empty string.
        let menu = sections.iter().find(|s| s.axis == Axis::Menu).unwrap();
        assert!(menu.body.is_none());

        let markdown = draft_markdown(&sections);
        assert!(markdown.contains("## Menu\n\n(not yet drafted)"));
    }

    #[test]
    fn draft_markdown_has_a_heading_per_axis() {
        let markdown = draft_markdown(&assemble_sections(&HashMap::new()));
        assert!(markdown.starts_with("# Business Plan\n"));
        for axis in REPORT_AXIS_ORDER {
            assert!(markdown.contains(&format!("## {}", axis.default_name())));
        }
    }

    #[test]
    fn user_prompt_carries_section_material() {
        let prompt = report_user_prompt(&assemble_sections(&summaries()));
        assert!(prompt.contains("[Concept]"));
        assert!(prompt.contains("A locals-first bistro."));
        assert!(prompt.contains("[Revenue Forecast]"));
    }
}
