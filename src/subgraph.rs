//! # Induced subgraphs
//!
//! A [`SubgraphView`] is a full-size copy of a graph together with an explicit
//! inclusion set, one bit per vertex. Cells between two included vertices hold
//! `1` where the original has an unweighted edge and `0` otherwise, so weighted
//! cells read as non-edges; every cell touching an excluded vertex reads as
//! [`Cell::Excluded`]. The legacy matrix form, where such cells hold `-1` and a
//! diagonal `-1` marks an excluded vertex, is available through
//! [`SubgraphView::to_sentinel_rows`] and [`SubgraphView::from_sentinel_rows`].
//!
//! [`SubgraphView::remap`] compresses a view into a dense [`Graph`] over the
//! included vertices only, keeping their relative order.
//!
//! Two generation policies produce subgraphs from a graph:
//!
//! - [`generate_subgraphs`]: one view per vertex subset of size ≥ 3, in
//!   ascending bitmask order.
//! - [`generate_permutation_subgraphs`]: one full-size graph per candidate
//!   ordering whose consecutive pairs are all edges, holding exactly those
//!   edges.

use std::{fmt, iter::FusedIterator};

use bitvec::{order::Lsb0, vec::BitVec};
use itertools::Itertools;

use crate::{
    cycle::traversal_closes,
    enumerate::CandidateOrderings,
    error::GraphError,
    graph::{Directedness, Graph},
    weight::EdgeWeight,
    MIN_CYCLE_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell<W> {
    Excluded,
    Empty,
    Edge(W),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgraphView<W = i32> {
    graph: Graph<W>,
    included: BitVec,
}

impl<W: EdgeWeight> SubgraphView<W> {
    /// The subgraph of `graph` induced by the set bits of `included`, keeping
    /// only its unweighted edges.
    ///
    /// `included` is padded with `false` or truncated to the vertex count.
    pub fn induced(graph: &Graph<W>, mut included: BitVec) -> Self {
        let n = graph.vertex_count();
        included.resize(n, false);

        let mut view = Graph::with_directedness(n, graph.directedness());
        for i in included.iter_ones() {
            for j in included.iter_ones() {
                if graph.is_edge(i, j) {
                    view.set_cell(i, j, W::ONE);
                }
            }
        }
        SubgraphView {
            graph: view,
            included,
        }
    }

    /// Induced view over an explicit vertex list. Out-of-range vertices are ignored.
    pub fn from_vertices(graph: &Graph<W>, vertices: &[usize]) -> Self {
        let mut included = BitVec::repeat(false, graph.vertex_count());
        for &v in vertices {
            if v < included.len() {
                included.set(v, true);
            }
        }
        Self::induced(graph, included)
    }

    /// Reads the legacy sentinel encoding: a diagonal `-1` excludes the vertex,
    /// any other diagonal value includes it. Negative off-diagonal cells are
    /// read as "no edge".
    pub fn from_sentinel_rows(
        rows: &[Vec<W>],
        directedness: Directedness,
    ) -> Result<Self, GraphError> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::NonSquareMatrix {
                row,
                len: r.len(),
                expected: n,
            });
        }

        let included: BitVec = (0..n).map(|i| rows[i][i] != W::SENTINEL).collect();
        let mut graph = Graph::with_directedness(n, directedness);
        for i in included.iter_ones() {
            for j in included.iter_ones() {
                let w = rows[i][j];
                if i == j || w.is_negative() {
                    continue;
                }
                if !directedness.is_directed() && rows[j][i] != w {
                    return Err(GraphError::AsymmetricMatrix(i, j));
                }
                graph.set_cell(i, j, w);
            }
        }
        Ok(SubgraphView { graph, included })
    }

    /// The full-size matrix with `-1` in every cell touching an excluded vertex.
    pub fn to_sentinel_rows(&self) -> Vec<Vec<W>> {
        let n = self.vertex_count();
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if self.included[i] && self.included[j] {
                            self.graph.cell(i, j)
                        } else {
                            W::SENTINEL
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Vertex count of the underlying full-size graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn included(&self) -> &BitVec {
        &self.included
    }

    pub fn included_count(&self) -> usize {
        self.included.count_ones()
    }

    pub fn is_included(&self, vertex: usize) -> bool {
        self.included.get(vertex).is_some_and(|b| *b)
    }

    /// The full-size graph; cells touching excluded vertices are empty.
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell<W>> {
        if row >= self.vertex_count() || col >= self.vertex_count() {
            return None;
        }
        if !(self.included[row] && self.included[col]) {
            return Some(Cell::Excluded);
        }
        let w = self.graph.cell(row, col);
        Some(if w.is_present() {
            Cell::Edge(w)
        } else {
            Cell::Empty
        })
    }

    /// Dense graph over the included vertices, relabelled in their original
    /// order, with cells copied verbatim.
    pub fn remap(&self) -> Graph<W> {
        let kept: Vec<usize> = self.included.iter_ones().collect();
        let mut dense = Graph::with_directedness(kept.len(), self.graph.directedness());
        for (r, &i) in kept.iter().enumerate() {
            for (c, &j) in kept.iter().enumerate() {
                dense.set_cell(r, c, self.graph.cell(i, j));
            }
        }
        dense
    }

    /// The coarse traversal check applied to [`remap`](Self::remap).
    pub fn is_cycle(&self) -> bool {
        traversal_closes(&self.remap())
    }
}

impl<W: EdgeWeight> fmt::Display for SubgraphView<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();
        for i in 0..n {
            let row = (0..n)
                .map(|j| match self.cell(i, j) {
                    Some(Cell::Edge(w)) => w.to_string(),
                    Some(Cell::Empty) => W::ZERO.to_string(),
                    Some(Cell::Excluded) | None => "X".to_string(),
                })
                .join(" ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Every subset of `0..n` as a bit mask, in ascending numeric order.
#[derive(Debug, Clone)]
pub struct VertexPowerset {
    n: usize,
    size: usize,
    current: usize,
}

impl VertexPowerset {
    pub fn new(n: usize) -> Result<Self, GraphError> {
        let size = u32::try_from(n)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .ok_or(GraphError::TooManyVertices {
                vertex_count: n,
                max: usize::BITS as usize - 1,
            })?;
        Ok(VertexPowerset {
            n,
            size,
            current: 0,
        })
    }
}

impl Iterator for VertexPowerset {
    type Item = BitVec;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.size {
            let mut out = BitVec::<usize, Lsb0>::from_element(self.current);
            out.truncate(self.n);
            self.current += 1;
            Some(out)
        } else {
            None
        }
    }
}

impl FusedIterator for VertexPowerset {}

/// Lazily yields one [`SubgraphView`] per vertex subset of size ≥ 3.
#[derive(Debug, Clone)]
pub struct AllSubgraphs<'g, W> {
    graph: &'g Graph<W>,
    powerset: VertexPowerset,
}

impl<W: EdgeWeight> Iterator for AllSubgraphs<'_, W> {
    type Item = SubgraphView<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.powerset
            .find(|mask| mask.count_ones() >= MIN_CYCLE_LEN)
            .map(|mask| SubgraphView::induced(graph, mask))
    }
}

/// All-subsets policy.
///
/// Fails only when the vertex count does not fit a machine-word bit mask,
/// which is far beyond anything enumerable anyway.
pub fn generate_subgraphs<W: EdgeWeight>(
    graph: &Graph<W>,
) -> Result<AllSubgraphs<'_, W>, GraphError> {
    Ok(AllSubgraphs {
        graph,
        powerset: VertexPowerset::new(graph.vertex_count())?,
    })
}

/// The full-size graph holding the edges along `ordering`, or `None` as soon
/// as a consecutive pair is not an edge of `graph`. No closing edge is added.
pub fn path_subgraph<W: EdgeWeight>(graph: &Graph<W>, ordering: &[usize]) -> Option<Graph<W>> {
    let mut sub = Graph::with_directedness(graph.vertex_count(), graph.directedness());
    for (&a, &b) in ordering.iter().tuple_windows() {
        if !graph.is_edge(a, b) {
            return None;
        }
        sub.add_edge(a, b);
    }
    Some(sub)
}

/// Lazily yields the path subgraph of every candidate ordering that has one.
#[derive(Debug, Clone)]
pub struct PermutationSubgraphs<'g, W> {
    graph: &'g Graph<W>,
    candidates: CandidateOrderings,
}

impl<W: EdgeWeight> Iterator for PermutationSubgraphs<'_, W> {
    type Item = Graph<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.candidates.find_map(|o| path_subgraph(graph, &o))
    }
}

/// Ordering-driven policy.
pub fn generate_permutation_subgraphs<W: EdgeWeight>(
    graph: &Graph<W>,
) -> PermutationSubgraphs<'_, W> {
    PermutationSubgraphs {
        graph,
        candidates: CandidateOrderings::new(graph.vertex_count()),
    }
}
