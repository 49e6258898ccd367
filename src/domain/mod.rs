//! Domain layer - pure business logic, no I/O.

pub mod catalog;
pub mod deep_dive;
pub mod foundation;
pub mod progress;
pub mod report;
pub mod scoring;
