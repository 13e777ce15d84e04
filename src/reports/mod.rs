//! Report generation modules for different output formats
//!
//! - human: the matrix followed by the cyclic verdict, for the console
//! - json: the same data for programmatic use

pub mod human;
pub mod json;

use crate::detector::{CycleAnalysis, CycleDetector};
use crate::error::CycleTraceError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTraceError>;
}

fn require_analysis(detector: &CycleDetector) -> Result<&CycleAnalysis, CycleTraceError> {
    detector
        .analysis()
        .ok_or_else(|| CycleTraceError::ConfigurationError {
            message: "No cycle detection has been run".to_string(),
        })
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
