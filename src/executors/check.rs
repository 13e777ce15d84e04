//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::detector::CycleDetector;
use crate::executors::{CommandExecutor, interactive_progress, load_matrix};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let Some(path) = config.path.as_deref() else {
            return Ok(());
        };

        eprintln!(
            "{} Checking {} for cycles...\n",
            style("🔍").cyan(),
            style(path.display()).bold()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = interactive_progress();

        let adjacency = load_matrix(path, progress.as_mut())?;

        let mut detector = CycleDetector::with_workers(config.workers);
        if let Some(p) = progress.as_mut() {
            p.start_exponentiation(adjacency.rows().saturating_sub(1), detector.workers());
        }

        detector
            .detect_cycles_with_progress(&adjacency, |done, _| {
                if let Some(p) = progress.as_ref() {
                    p.update_exponentiation(done);
                }
            })
            .wrap_err("Failed to detect cycles")?;

        if let Some(p) = progress.as_mut() {
            p.finish_exponentiation();
            p.finish_cycle_detection(detector.has_cycles());
        }

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.show_walks).generate_report(&detector)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&detector),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
