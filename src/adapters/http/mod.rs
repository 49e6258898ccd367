//! HTTP adapters - REST API implementations.
//!
//! Each feature module carries its own dto/handlers/routes files and app
//! state. Routers are assembled into one app in `main`.

pub mod dashboard;
pub mod deep_dive;
pub mod detail_questions;
pub mod error;
pub mod middleware;
pub mod report;

pub use dashboard::{dashboard_routes, DashboardAppState};
pub use deep_dive::{deep_dive_routes, DeepDiveAppState};
pub use detail_questions::{detail_questions_routes, DetailQuestionsAppState};
pub use error::ErrorResponse;
pub use report::{report_routes, ReportAppState};
