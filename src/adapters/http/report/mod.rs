//! Report HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ReportAppState;
pub use routes::report_routes;
