use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::error::CycleTraceError;
use crate::graph::{AdjacencyEdge, GraphNode};
use crate::utils::string::node_name;

mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD";
    pub const NORMAL_NODE_STROKE: &str = "#1976D2";
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0";
    pub const CYCLE_NODE_STROKE: &str = "#F57C00";
    pub const NORMAL_EDGE: &str = "#64B5F6";
    pub const CYCLE_EDGE: &str = "#FF6500";
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CycleTraceError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CycleTraceError::from)
    };
}

/// Renders an adjacency graph as ASCII, Graphviz DOT or Mermaid.
///
/// Nodes listed in `cyclic_nodes` (and edges between two of them) are
/// highlighted when highlighting is enabled.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(
        &self,
        graph: &DiGraph<GraphNode, AdjacencyEdge>,
        cyclic_nodes: &[usize],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No nodes found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Adjacency Graph\n")?;

        for node_idx in sorted_nodes(graph) {
            let node = &graph[node_idx];
            if self.is_highlighted(node, cyclic_nodes) {
                writeln_out!(output, "{} ⚠️  ON A CLOSED WALK", node.name())?;
            } else {
                writeln_out!(output, "{}", node.name())?;
            }

            let mut targets: Vec<_> = graph
                .edges(node_idx)
                .map(|edge| (graph[edge.target()].index(), edge.weight().weight()))
                .collect();
            targets.sort();

            if targets.is_empty() {
                writeln_out!(output, "  └── (no outgoing edges)")?;
                continue;
            }

            for (i, (target, weight)) in targets.iter().enumerate() {
                let branch = if i + 1 == targets.len() {
                    "└──"
                } else {
                    "├──"
                };
                if *weight == 1 {
                    writeln_out!(output, "  {} {}", branch, node_name(*target))?;
                } else {
                    writeln_out!(output, "  {} {} (x{})", branch, node_name(*target), weight)?;
                }
            }
        }

        if self.highlight_cycles && !cyclic_nodes.is_empty() {
            writeln_out!(output, "\n⚠️  = Lies on a closed walk of length n")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<GraphNode, AdjacencyEdge>,
        cyclic_nodes: &[usize],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph adjacency {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=circle];")?;
        writeln_out!(output)?;

        for node_idx in sorted_nodes(graph) {
            let node = &graph[node_idx];
            let (fill, stroke) = if self.is_highlighted(node, cyclic_nodes) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                r#"    "{}" [style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                node.name(),
                fill,
                stroke
            )?;
        }

        writeln_out!(output)?;

        for edge in sorted_edges(graph) {
            let (source, target) = (&graph[edge.0], &graph[edge.1]);
            let color = if self.is_highlighted(source, cyclic_nodes)
                && self.is_highlighted(target, cyclic_nodes)
            {
                colors::CYCLE_EDGE
            } else {
                colors::NORMAL_EDGE
            };
            let label = if edge.2 == 1 {
                String::new()
            } else {
                format!(r#", label="{}""#, edge.2)
            };
            writeln_out!(
                output,
                r#"    "{}" -> "{}" [color="{}"{}];"#,
                source.name(),
                target.name(),
                color,
                label
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<GraphNode, AdjacencyEdge>,
        cyclic_nodes: &[usize],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        for node_idx in sorted_nodes(graph) {
            let node = &graph[node_idx];
            writeln_out!(output, "    {}(({}))", node.name(), node.name())?;
        }

        for (source, target, weight) in sorted_edges(graph) {
            let (source, target) = (&graph[source], &graph[target]);
            if weight == 1 {
                writeln_out!(output, "    {} --> {}", source.name(), target.name())?;
            } else {
                writeln_out!(
                    output,
                    "    {} -->|{}| {}",
                    source.name(),
                    weight,
                    target.name()
                )?;
            }
        }

        let highlighted: Vec<String> = sorted_nodes(graph)
            .into_iter()
            .map(|idx| &graph[idx])
            .filter(|node| self.is_highlighted(node, cyclic_nodes))
            .map(GraphNode::name)
            .collect();

        if !highlighted.is_empty() {
            writeln_out!(output)?;
            writeln_out!(
                output,
                "    classDef cycle fill:{},stroke:{},stroke-width:2px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
            writeln_out!(output, "    class {} cycle", highlighted.join(","))?;
        }

        Ok(())
    }

    fn is_highlighted(&self, node: &GraphNode, cyclic_nodes: &[usize]) -> bool {
        self.highlight_cycles && cyclic_nodes.contains(&node.index())
    }
}

fn sorted_nodes(graph: &DiGraph<GraphNode, AdjacencyEdge>) -> Vec<NodeIndex> {
    let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
    nodes.sort_by_key(|&idx| graph[idx].index());
    nodes
}

fn sorted_edges(graph: &DiGraph<GraphNode, AdjacencyEdge>) -> Vec<(NodeIndex, NodeIndex, i64)> {
    let mut edges: Vec<_> = graph
        .edge_references()
        .map(|edge| (edge.source(), edge.target(), edge.weight().weight()))
        .collect();
    edges.sort_by_key(|&(source, target, _)| (graph[source].index(), graph[target].index()));
    edges
}
