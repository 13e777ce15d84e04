//! Command implementations for the cycle-trace CLI
//!
//! - check: decide whether the graph in a CSV adjacency matrix is cyclic
//! - graph: draw the graph described by an adjacency matrix

pub mod check;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check(_) => check::execute_check_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
    }
}
