//! Dashboard-level aggregation of per-axis scores.

mod aggregator;

pub use aggregator::{
    calculate_axis_scores, calculate_detail_progress, pick_next_focus, DetailProgress, NextFocus,
};
