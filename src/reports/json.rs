//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, require_analysis};
use crate::detector::CycleDetector;
use crate::error::CycleTraceError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTraceError> {
        let analysis = require_analysis(detector)?;

        let report = json!({
            "rows": analysis.adjacency().rows(),
            "columns": analysis.adjacency().columns(),
            "entries": analysis.adjacency().entries(),
            "power": analysis.power(),
            "trace": analysis.trace(),
            "cyclic_nodes": detector.cyclic_nodes(),
            "is_cyclic": analysis.is_cyclic(),
        });

        serde_json::to_string_pretty(&report).map_err(CycleTraceError::Json)
    }
}
