//! # Cycle predicates
//!
//! Two unrelated tests live here and are kept apart on purpose:
//!
//! - [`is_cycle`] checks one concrete ordering: every consecutive pair, and the
//!   closing pair from the last vertex back to the first, must be an edge.
//!   Driving it with [`CandidateOrderings`] enumerates every simple cycle of
//!   length `3..=n`, each rotation and orientation counted separately.
//! - [`traversal_closes`] runs a depth-first walk from vertex `0` and reports
//!   `true` once the walk meets an already visited vertex while *every* vertex
//!   has been visited. This is coarse: a connected path also satisfies it. It
//!   is only meaningful on a remapped subgraph that is already a candidate
//!   cycle skeleton (see [`SubgraphView::is_cycle`](crate::subgraph::SubgraphView::is_cycle)).

use std::collections::BTreeSet;

use bitvec::bitvec;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    enumerate::CandidateOrderings,
    graph::{Directedness, Graph},
    permutation::Orderings,
    weight::EdgeWeight,
    MIN_CYCLE_LEN,
};

/// Whether `ordering`, taken in exactly that order, is a closed walk over
/// unit edges of `graph`.
///
/// Orderings shorter than three vertices are never cycles.
pub fn is_cycle<W: EdgeWeight>(graph: &Graph<W>, ordering: &[usize]) -> bool {
    if ordering.len() < MIN_CYCLE_LEN {
        return false;
    }
    ordering
        .iter()
        .circular_tuple_windows()
        .all(|(&a, &b)| graph.is_edge(a, b))
}

/// Stack-based depth-first traversal from vertex `0`.
///
/// Returns `true` as soon as the scan reaches an already visited neighbour
/// while all vertices are visited. A vertex is finalised once all of its
/// edges have been scanned.
pub fn traversal_closes<W: EdgeWeight>(graph: &Graph<W>) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return false;
    }

    let mut visited = bitvec![0; n];
    // finalised vertices; only traced, the result never depends on it
    let mut done = bitvec![0; n];
    // next column to scan for each vertex on the stack
    let mut cursor = vec![0usize; n];
    let mut stack = vec![0usize];
    visited.set(0, true);

    while let Some(&v) = stack.last() {
        match (cursor[v]..n).find(|&u| graph.is_edge(v, u)) {
            Some(u) => {
                cursor[v] = u + 1;
                if !visited[u] {
                    visited.set(u, true);
                    stack.push(u);
                } else if visited.all() {
                    trace!(from = v, to = u, "traversal closed");
                    return true;
                }
            }
            None => {
                done.set(v, true);
                stack.pop();
            }
        }
    }

    trace!(finalised = done.count_ones(), of = n, "traversal exhausted");
    false
}

/// Lazily yields every candidate ordering of `graph` that [`is_cycle`].
#[derive(Debug, Clone)]
pub struct Cycles<'g, W> {
    graph: &'g Graph<W>,
    candidates: CandidateOrderings,
}

impl<'g, W: EdgeWeight> Cycles<'g, W> {
    pub fn new(graph: &'g Graph<W>) -> Self {
        Cycles {
            graph,
            candidates: CandidateOrderings::new(graph.vertex_count()),
        }
    }
}

impl<W: EdgeWeight> Iterator for Cycles<'_, W> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.candidates.find(|o| is_cycle(graph, o))
    }
}

pub fn cycles<W: EdgeWeight>(graph: &Graph<W>) -> Cycles<'_, W> {
    Cycles::new(graph)
}

/// Number of candidate orderings that are cycles.
pub fn count_cycles<W: EdgeWeight>(graph: &Graph<W>) -> usize {
    let mut tested = 0usize;
    let found = CandidateOrderings::new(graph.vertex_count())
        .inspect(|_| tested += 1)
        .filter(|o| is_cycle(graph, o))
        .count();
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        tested,
        found,
        "cycle enumeration finished"
    );
    found
}

/// Counts only the orderings of the full vertex range `0..n`, i.e. the
/// Hamiltonian cycles, without going through subsets first.
pub fn count_cycles_in_range<W: EdgeWeight>(graph: &Graph<W>) -> usize {
    let found = Orderings::of_range(graph.vertex_count())
        .filter(|o| is_cycle(graph, o))
        .count();
    debug!(vertices = graph.vertex_count(), found, "full-range enumeration finished");
    found
}

/// Rotates `cycle` so its smallest vertex leads and, when undirected, picks
/// the lexicographically smaller of the two orientations.
pub fn canonical_cycle(cycle: &[usize], directedness: Directedness) -> Vec<usize> {
    fn rotate_to_smallest(cycle: &mut [usize]) {
        if let Some(pos) = cycle.iter().position_min() {
            cycle.rotate_left(pos);
        }
    }

    let mut forward = cycle.to_vec();
    rotate_to_smallest(&mut forward);
    if directedness.is_directed() {
        return forward;
    }

    let mut reversed = cycle.to_vec();
    reversed.reverse();
    rotate_to_smallest(&mut reversed);
    forward.min(reversed)
}

/// Cycles of `graph` with rotations (and orientations, if undirected)
/// identified, in canonical form.
pub fn distinct_cycles<W: EdgeWeight>(graph: &Graph<W>) -> BTreeSet<Vec<usize>> {
    let directedness = graph.directedness();
    cycles(graph)
        .map(|c| canonical_cycle(&c, directedness))
        .collect()
}

#[cfg(test)]
mod tests;
