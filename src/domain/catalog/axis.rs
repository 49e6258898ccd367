//! The eight planning axes and their reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at which an axis is considered "good enough" on the dashboard.
pub const OK_LINE: f64 = 5.0;

/// Score band above the OK line where an axis is growing but not yet strong.
pub const GROWTH_ZONE: f64 = 6.0;

/// A planning axis of the business plan.
///
/// Display names carry a historical quirk: `funds` displays as
/// "Revenue Forecast" and `compliance` as "Funding Plan". The code
/// `interior_exterior` is a legacy alias of `equipment`; both must resolve
/// to the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Concept,
    Funds,
    Compliance,
    Operation,
    Location,
    Equipment,
    Marketing,
    Menu,
}

impl Axis {
    /// All axes in fixed dashboard order.
    pub const ALL: [Axis; 8] = [
        Axis::Concept,
        Axis::Funds,
        Axis::Compliance,
        Axis::Operation,
        Axis::Location,
        Axis::Equipment,
        Axis::Marketing,
        Axis::Menu,
    ];

    /// Resolves an axis code, accepting legacy aliases.
    pub fn from_code(code: &str) -> Option<Axis> {
        match code {
            "concept" => Some(Axis::Concept),
            "funds" => Some(Axis::Funds),
            "compliance" => Some(Axis::Compliance),
            "operation" => Some(Axis::Operation),
            "location" => Some(Axis::Location),
            // "interior_exterior" is the code used by the answer tables
            // written before the axis was renamed.
            "equipment" | "interior_exterior" => Some(Axis::Equipment),
            "marketing" => Some(Axis::Marketing),
            "menu" => Some(Axis::Menu),
            _ => None,
        }
    }

    /// Canonical axis code (question codes are derived from this).
    pub fn as_code(&self) -> &'static str {
        match self {
            Axis::Concept => "concept",
            Axis::Funds => "funds",
            Axis::Compliance => "compliance",
            Axis::Operation => "operation",
            Axis::Location => "location",
            Axis::Equipment => "equipment",
            Axis::Marketing => "marketing",
            Axis::Menu => "menu",
        }
    }

    /// Default display name, used when no database override exists.
    pub fn default_name(&self) -> &'static str {
        match self {
            Axis::Concept => "Concept",
            Axis::Funds => "Revenue Forecast",
            Axis::Compliance => "Funding Plan",
            Axis::Operation => "Operations",
            Axis::Location => "Location",
            Axis::Equipment => "Interior & Exterior",
            Axis::Marketing => "Marketing",
            Axis::Menu => "Menu",
        }
    }

    /// Canned next-step hint shown on the dashboard.
    pub fn next_step_hint(&self) -> &'static str {
        match self {
            Axis::Concept => {
                "Summarize target, value, and experience in one sentence and share it with photos or keywords."
            }
            Axis::Funds => {
                "Estimate sales as covers x spend x turns, and check it against ingredient, labor, and rent costs."
            }
            Axis::Compliance => {
                "Rough out the mix of own capital, loans, and subsidies, and sketch the repayment plan."
            }
            Axis::Operation => {
                "Lay out a full day as a timeline and jot down shifts and floor flow."
            }
            Axis::Location => {
                "Compare rent levels and foot traffic across candidate areas and sanity-check the rent ratio."
            }
            Axis::Equipment => {
                "Draft a rough layout of kitchen, seating, and storage, and fill in the equipment checklist."
            }
            Axis::Marketing => {
                "Pick three launch channels and pair them with review collection and a repeat-visit loop."
            }
            Axis::Menu => {
                "Cost three signature dishes, define the service flow, and trial a price point."
            }
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
