//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, require_analysis};
use crate::detector::CycleDetector;
use crate::error::CycleTraceError;
use crate::utils::string::{node_list, pluralize};

pub struct HumanReportGenerator {
    show_walks: bool,
}

impl HumanReportGenerator {
    /// `show_walks` also prints `A^n` and the nodes on closed walks.
    pub fn new(show_walks: bool) -> Self {
        Self { show_walks }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, CycleTraceError> {
        let analysis = require_analysis(detector)?;
        let mut output = String::new();

        writeln!(output, "Original matrix:")?;
        writeln!(output, "{}", analysis.adjacency())?;

        if self.show_walks {
            writeln!(
                output,
                "\n{} Closed walks of length {} (A^{}):",
                style("🔗").cyan(),
                analysis.power(),
                analysis.power()
            )?;
            writeln!(output, "{}", analysis.walks())?;
            writeln!(
                output,
                "  {} trace = {}",
                style("→").dim(),
                style(analysis.trace()).bold()
            )?;

            let nodes = detector.cyclic_nodes();
            if !nodes.is_empty() {
                writeln!(
                    output,
                    "  {} {} on a closed walk: {}",
                    style("→").dim(),
                    pluralize("node", nodes.len()),
                    node_list(&nodes)
                )?;
            }
            writeln!(output)?;
        }

        writeln!(output, "Is it cyclic?")?;
        let verdict = analysis.is_cyclic();
        if verdict {
            writeln!(output, "{}", style(verdict).red().bold())?;
        } else {
            writeln!(output, "{}", style(verdict).green().bold())?;
        }

        Ok(output)
    }
}
