//! Graph sources for the benchmark drivers.

use rand::Rng;

use crate::{
    error::GraphError,
    graph::{Directedness, Graph},
    weight::EdgeWeight,
};

/// Builds a graph from an edge list with the silent bounds policy: pairs that
/// are out of range or self-loops are skipped.
pub fn from_edges<W: EdgeWeight>(
    vertex_count: usize,
    directedness: Directedness,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> Graph<W> {
    let mut graph = Graph::with_directedness(vertex_count, directedness);
    for (src, dst) in edges {
        graph.add_edge(src, dst);
    }
    graph
}

/// Strict counterpart of [`from_edges`]: the first invalid pair is an error.
pub fn try_from_edges<W: EdgeWeight>(
    vertex_count: usize,
    directedness: Directedness,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> Result<Graph<W>, GraphError> {
    let mut graph = Graph::with_directedness(vertex_count, directedness);
    for (src, dst) in edges {
        graph.try_add_edge(src, dst)?;
    }
    Ok(graph)
}

/// Each pair receives an unweighted edge independently with probability `p`
/// (both directions are drawn separately for directed graphs).
pub fn random_graph<W: EdgeWeight, R: Rng + ?Sized>(
    vertex_count: usize,
    directedness: Directedness,
    p: f64,
    rng: &mut R,
) -> Result<Graph<W>, GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidProbability(p));
    }
    let mut graph = Graph::with_directedness(vertex_count, directedness);
    for i in 0..vertex_count {
        let start = if directedness.is_directed() { 0 } else { i + 1 };
        for j in start..vertex_count {
            if i != j && rng.gen_bool(p) {
                graph.add_edge(i, j);
            }
        }
    }
    Ok(graph)
}
