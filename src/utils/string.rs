//! String helpers shared by reports, renderers and progress output

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Display name of the node at `index`: its matrix row, prefixed with `n`.
pub fn node_name(index: usize) -> String {
    format!("n{index}")
}

/// Comma-separated node names, e.g. `n0, n2, n3`.
pub fn node_list(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| node_name(i))
        .collect::<Vec<_>>()
        .join(", ")
}
