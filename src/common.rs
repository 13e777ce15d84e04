//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Input file arguments
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to a CSV file containing the adjacency matrix
    #[arg(long, value_name = "PATH", env = "CYCLE_TRACE_FILE_LOCATION")]
    pub file_location: Option<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CYCLE_TRACE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Multiplication pipeline arguments
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Number of product workers (defaults to the number of CPU cores)
    #[arg(short, long, env = "CYCLE_TRACE_WORKERS")]
    pub workers: Option<usize>,
}

impl InputArgs {
    /// The input path, or `None` when it is missing or empty
    pub fn path(&self) -> Option<PathBuf> {
        self.file_location
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

impl PipelineArgs {
    /// Requested worker count, falling back to one per core
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(rayon::current_num_threads)
            .max(crate::constants::pipeline::MIN_WORKERS)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CycleTraceError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CycleTraceError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CycleTraceError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
