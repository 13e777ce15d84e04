//! # Graph Construction and Rendering Module
//!
//! A petgraph view of an adjacency matrix, and renderers that draw it with
//! the nodes found on closed walks highlighted.
//!
//! ## Example
//!
//! ```
//! use cycle_trace::graph::{AdjacencyGraphBuilder, GraphRenderer};
//! use cycle_trace::matrix::Matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]])?;
//!
//! let mut builder = AdjacencyGraphBuilder::new();
//! let graph = builder.build_from_matrix(&matrix);
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_dot(graph, &[0, 1], &mut output)?;
//!
//! let dot = String::from_utf8(output)?;
//! assert!(dot.contains(r#""n0" -> "n1""#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **ASCII**: terminal-friendly adjacency listing
//! - **DOT**: Graphviz format
//! - **Mermaid**: Markdown-compatible diagrams

mod builder;
mod renderer;
mod types;

pub use builder::AdjacencyGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{AdjacencyEdge, GraphNode};
