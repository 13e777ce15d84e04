//! # Cycle Detection Module
//!
//! Decides whether a graph contains a cycle from its adjacency matrix.
//!
//! ## Algorithm
//!
//! Entry `(i, j)` of `A^k` counts the walks of length `k` from node `i` to
//! node `j`. The detector raises an `n x n` adjacency matrix to the `n`-th
//! power and reports a cycle when the trace, the number of closed walks of
//! length `n`, is nonzero.
//!
//! This costs `n - 1` multiplications of `O(n^3)` scalar products each. A
//! depth-first search would be linear; the point here is the concurrent
//! multiplication pipeline underneath.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs the analysis and keeps the result for reports
//! - **CycleAnalysis**: the adjacency matrix, `A^n` and the trace
//! - **is_cyclic**: one-shot convenience wrapper
//!
//! ## Example
//!
//! ```
//! use cycle_trace::detector::CycleDetector;
//! use cycle_trace::matrix::Matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 -> 1 -> 2 -> 0
//! let adjacency = Matrix::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]])?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&adjacency)?;
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cyclic_nodes(), vec![0, 1, 2]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
