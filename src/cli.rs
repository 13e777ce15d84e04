use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::common::{FormatArgs, InputArgs, PipelineArgs};

#[derive(Parser)]
#[command(
    name = "cycle-trace",
    about = "Detect graph cycles from the trace of the adjacency matrix's n-th power",
    long_about = "cycle-trace reads an adjacency matrix from a CSV file, raises it to the power \
                  of its node count through a concurrent multiplication pipeline and reports \
                  the graph as cyclic when the trace of the result is nonzero. Without a \
                  subcommand it behaves like `check`.",
    version
)]
pub struct Cli {
    /// Arguments for checking without a subcommand
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run. Without a subcommand the top-level arguments
    /// drive `check`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Check(self.check))
    }
}

/// Arguments of the `check` command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub format: FormatArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Also print A^n, its trace and the nodes on closed walks
    #[arg(long, env = "CYCLE_TRACE_SHOW_WALKS")]
    pub show_walks: bool,

    /// Exit with error code if the graph is cyclic
    #[arg(long, env = "CYCLE_TRACE_ERROR_ON_CYCLES")]
    pub error_on_cycles: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide whether the graph in a CSV adjacency matrix is cyclic
    ///
    /// Prints the matrix followed by the verdict. Does nothing when no file
    /// location is given.
    #[command(
        long_about = "Load an adjacency matrix (one row per line, comma-separated integers), \
                      compute A^n where n is the number of nodes, and print whether the trace \
                      is nonzero. Each multiplication is split into scalar products that a pool \
                      of worker threads computes concurrently."
    )]
    Check(CheckArgs),

    /// Draw the graph described by an adjacency matrix
    #[command(
        long_about = "Render the adjacency matrix as a directed graph in ASCII, Graphviz DOT or \
                      Mermaid format. With --highlight-cycles the matrix is exponentiated first \
                      and nodes on closed walks of length n are highlighted."
    )]
    Graph {
        #[command(flatten)]
        input: InputArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "CYCLE_TRACE_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CYCLE_TRACE_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight nodes that lie on closed walks
        #[arg(long, env = "CYCLE_TRACE_HIGHLIGHT_CYCLES")]
        highlight_cycles: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
