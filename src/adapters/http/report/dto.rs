//! HTTP DTOs for the report endpoint.

pub use crate::adapters::http::ErrorResponse;
pub use crate::application::handlers::report::GenerateReportResult as ReportView;
