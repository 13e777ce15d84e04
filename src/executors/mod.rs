//! Command executors that handle the actual logic for each command

pub mod check;
pub mod graph;

use std::path::Path;

use console::style;
use miette::{Result, WrapErr};

use crate::csv_parser::AdjacencyCsv;
use crate::matrix::Matrix;
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the adjacency matrix, warning when it is not square.
fn load_matrix(path: &Path, progress: Option<&mut ProgressReporter>) -> Result<Matrix> {
    let mut progress = progress;
    if let Some(p) = progress.as_deref_mut() {
        p.start_loading(path);
    }

    let csv = AdjacencyCsv::parse_file(path)
        .wrap_err_with(|| format!("Failed to load matrix from '{}'", path.display()))?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish_loading(csv.matrix().rows(), csv.matrix().columns());
    }

    if !csv.is_square() {
        eprintln!(
            "{} Only square matrices describe a graph ({}x{} given)",
            style("WARN:").yellow().bold(),
            csv.matrix().rows(),
            csv.matrix().columns()
        );
    }

    Ok(csv.into_matrix())
}

fn interactive_progress() -> Option<ProgressReporter> {
    if console::Term::stderr().is_term() {
        Some(ProgressReporter::new())
    } else {
        None
    }
}
