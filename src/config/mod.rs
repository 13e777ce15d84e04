//! # Configuration Module
//!
//! Configuration structures for the cycle-trace commands, each with a builder.
//!
//! - **CheckConfig**: options for the `check` command
//! - **GraphOptions**: options for the `graph` command
//!
//! ## Example
//!
//! ```
//! use cycle_trace::cli::OutputFormat;
//! use cycle_trace::common::ConfigBuilder;
//! use cycle_trace::config::CheckConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckConfig::builder()
//!     .with_path(Some("graph.csv".into()))
//!     .with_format(OutputFormat::Human)
//!     .with_workers(4)
//!     .with_show_walks(false)
//!     .with_error_on_cycles(true)
//!     .build()?;
//!
//! assert_eq!(config.workers, 4);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod graph;

pub use check::CheckConfig;
pub use graph::GraphOptions;
