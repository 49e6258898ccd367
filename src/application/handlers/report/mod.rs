//! Business-plan report handler.

mod generate_report;

pub use generate_report::{
    GenerateReportHandler, GenerateReportQuery, GenerateReportResult, ReportSource,
};
