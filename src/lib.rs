//! # Cycle Trace - Detect Graph Cycles with Matrix Powers
//!
//! Cycle Trace decides whether a graph is cyclic from its adjacency matrix.
//! For an `n`-node graph it computes `A^n` and checks the trace: every
//! diagonal entry counts the closed walks of length `n` through that node.
//!
//! The multiplications run through a concurrent producer/consumer pipeline.
//! Each product is broken into scalar pairs, fanned out to a pool of worker
//! threads over bounded channels and fanned back in to rebuild the result.
//!
//! ## Main Components
//!
//! - **Matrix**: validated integer matrices with trace and exponentiation
//! - **Pipeline**: the encoder, product workers and assembler behind every
//!   multiplication
//! - **Detector**: exponentiates and reads the trace
//! - **Reports**: human-readable and JSON output
//! - **Graph**: renders the adjacency graph as ASCII, DOT or Mermaid
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cycle_trace::csv_parser::AdjacencyCsv;
//! use cycle_trace::detector::CycleDetector;
//! use cycle_trace::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let csv = AdjacencyCsv::parse_file(Path::new("graph.csv"))?;
//!
//! let mut detector = CycleDetector::with_workers(4);
//! detector.detect_cycles(csv.matrix())?;
//!
//! println!("{}", HumanReportGenerator::new(false).generate_report(&detector)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Working with matrices directly
//!
//! ```
//! use cycle_trace::detector::is_cyclic;
//! use cycle_trace::matrix::Matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = Matrix::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]])?;
//! assert!(!is_cyclic(&chain)?);
//!
//! let ring = Matrix::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]])?;
//! assert!(is_cyclic(&ring)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod csv_parser;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod matrix;
pub mod pipeline;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.into_command())
}
