//! Tests for the graph renderer module

use cycle_trace::graph::{AdjacencyGraphBuilder, GraphRenderer};
use cycle_trace::matrix::Matrix;
use pretty_assertions::assert_eq;

fn render<F>(matrix: &Matrix, cyclic_nodes: &[usize], highlight: bool, draw: F) -> String
where
    F: Fn(
        &GraphRenderer,
        &petgraph::graph::DiGraph<cycle_trace::graph::GraphNode, cycle_trace::graph::AdjacencyEdge>,
        &[usize],
        &mut Vec<u8>,
    ) -> miette::Result<()>,
{
    let mut builder = AdjacencyGraphBuilder::new();
    let graph = builder.build_from_matrix(matrix);
    let mut output = Vec::new();
    draw(&GraphRenderer::new(highlight), graph, cyclic_nodes, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn two_cycle_with_tail() -> Matrix {
    // n0 <-> n1, n1 -> n2 twice
    Matrix::from_rows(vec![vec![0, 1, 0], vec![1, 0, 2], vec![0, 0, 0]]).unwrap()
}

#[test]
fn test_ascii_lists_edges_per_node() {
    let output = render(&two_cycle_with_tail(), &[0, 1], true, |r, g, c, o| {
        r.render_ascii(g, c, o)
    });

    let expected = "\n📊 Adjacency Graph\n\n\
                    n0 ⚠️  ON A CLOSED WALK\n  └── n1\n\
                    n1 ⚠️  ON A CLOSED WALK\n  ├── n0\n  └── n2 (x2)\n\
                    n2\n  └── (no outgoing edges)\n\
                    \n⚠️  = Lies on a closed walk of length n\n";
    assert_eq!(output, expected);
}

#[test]
fn test_ascii_without_highlighting() {
    let output = render(&two_cycle_with_tail(), &[0, 1], false, |r, g, c, o| {
        r.render_ascii(g, c, o)
    });

    assert!(!output.contains("CLOSED WALK"));
}

#[test]
fn test_dot_highlights_cycle_edges_only() {
    let output = render(&two_cycle_with_tail(), &[0, 1], true, |r, g, c, o| {
        r.render_dot(g, c, o)
    });

    assert!(output.starts_with("digraph adjacency {"));
    assert!(output.contains(r##""n0" -> "n1" [color="#FF6500"];"##));
    assert!(output.contains(r##""n1" -> "n2" [color="#64B5F6", label="2"];"##));
    assert!(output.trim_end().ends_with('}'));
}

#[test]
fn test_mermaid_output() {
    let output = render(&two_cycle_with_tail(), &[0, 1], true, |r, g, c, o| {
        r.render_mermaid(g, c, o)
    });

    assert!(output.starts_with("graph LR\n"));
    assert!(output.contains("    n0 --> n1\n"));
    assert!(output.contains("    n1 -->|2| n2\n"));
    assert!(output.contains("    class n0,n1 cycle\n"));
}

#[test]
fn test_mermaid_without_cycles_has_no_class() {
    let dag = Matrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
    let output = render(&dag, &[], true, |r, g, c, o| r.render_mermaid(g, c, o));

    assert!(!output.contains("classDef"));
}
