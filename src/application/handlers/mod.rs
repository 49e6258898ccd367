//! Use-case handlers, one per operation.
//!
//! Handlers orchestrate ports and the pure scoring core. They own the
//! degradation rules: snapshot writes and AI calls may fail without failing
//! the operation.

pub mod dashboard;
pub mod deep_dive;
pub mod detail_questions;
pub mod report;
