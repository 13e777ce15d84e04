use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::{AdjacencyEdge, GraphNode};
use crate::matrix::Matrix;

/// Builds a petgraph view of an adjacency matrix.
///
/// Every row becomes a node and every nonzero entry `(i, j)` an edge
/// `i -> j`. Columns beyond the row count of a non-square matrix have no
/// node and are ignored.
pub struct AdjacencyGraphBuilder {
    graph: DiGraph<GraphNode, AdjacencyEdge>,
}

impl Default for AdjacencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjacencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    pub fn build_from_matrix(&mut self, matrix: &Matrix) -> &DiGraph<GraphNode, AdjacencyEdge> {
        self.graph.clear();

        let nodes: Vec<NodeIndex> = (0..matrix.rows())
            .map(|i| self.graph.add_node(GraphNode::new(i)))
            .collect();

        for (i, row) in matrix.entries().iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                if let Some(&target) = nodes.get(j) {
                    self.graph
                        .add_edge(nodes[i], target, AdjacencyEdge::new(weight));
                }
            }
        }

        &self.graph
    }

    pub fn graph(&self) -> &DiGraph<GraphNode, AdjacencyEdge> {
        &self.graph
    }
}
