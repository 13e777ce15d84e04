//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::CycleTraceError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, CycleTraceError> {
        match command {
            Commands::Graph {
                input,
                format,
                output,
                highlight_cycles,
                pipeline,
            } => GraphOptions::builder()
                .with_path(input.path())
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .with_workers(pipeline.worker_count())
                .build(),
            _ => Err(CycleTraceError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for rendering an adjacency matrix
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let options = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(options)
}
