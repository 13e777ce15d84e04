//! Graph node and edge types

/// A node of the adjacency graph, identified by its matrix row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    index: usize,
}

impl GraphNode {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Row and column of this node in the adjacency matrix.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> String {
        crate::utils::string::node_name(self.index)
    }
}

/// A directed edge. `weight` is the adjacency entry, which counts parallel
/// edges in a multigraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEdge {
    weight: i64,
}

impl AdjacencyEdge {
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }
}
