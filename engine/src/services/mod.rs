//! Business logic services for the CloudVision analysis engine

pub mod context;
pub mod fusion;
pub mod live_condition;
pub mod nowcast;
pub mod report;

pub use report::{ExportFile, ReportExport, ReportState};
