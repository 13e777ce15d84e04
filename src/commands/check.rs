//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::CycleTraceError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, CycleTraceError> {
        match command {
            Commands::Check(args) => CheckConfig::builder()
                .with_path(args.input.path())
                .with_format(args.format.format)
                .with_workers(args.pipeline.worker_count())
                .with_show_walks(args.show_walks)
                .with_error_on_cycles(args.error_on_cycles)
                .build(),
            _ => Err(CycleTraceError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for detecting cycles in an adjacency matrix
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
