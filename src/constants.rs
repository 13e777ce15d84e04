//! Configuration constants for cycle-trace
//!
//! Values that tune the command-line experience and the multiplication
//! pipeline.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a matrix is loading
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Multiplication pipeline configuration
pub mod pipeline {
    /// A pipeline always runs at least this many product workers
    pub const MIN_WORKERS: usize = 1;
}
