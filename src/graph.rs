//! # Adjacency-matrix graphs
//!
//! [`Graph`] stores a dense `n × n` matrix of [`EdgeWeight`] cells. One type
//! covers every variant the benchmarks need:
//!
//! - **Directedness**: [`Directedness::Undirected`] mirrors every mutation so
//!   `cell(i, j) == cell(j, i)` always holds; [`Directedness::Directed`] writes
//!   only the `(src, dst)` cell.
//! - **Weights**: the cell type `W` (default `i32`). Unweighted edges store
//!   `W::ONE`.
//!
//! Two flavours of mutation and query exist. The plain ones (`add_edge`,
//! `remove_edge`, `is_edge`, ...) silently ignore out-of-range indices and
//! self-loops. The `try_*` ones report them as [`GraphError`].
//!
//! ```
//! use cyclenum::graph::Graph;
//!
//! let mut g: Graph = Graph::new(3);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//! g.add_edge(7, 0); // ignored
//!
//! assert!(g.is_edge(1, 0));
//! assert_eq!(g.edge_count(), 2);
//! ```

use std::fmt;

use itertools::Itertools;

use crate::{error::GraphError, weight::EdgeWeight};

/// Largest vertex count whose `n × n` cell count fits a `usize`.
pub const MAX_VERTICES: usize = (1usize << (usize::BITS / 2)) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directedness {
    #[default]
    Undirected,
    Directed,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<W = i32> {
    vertex_count: usize,
    directedness: Directedness,
    cells: Vec<W>, // row-major, vertex_count * vertex_count
}

impl<W: EdgeWeight> Graph<W> {
    /// An undirected graph on `vertex_count` vertices with no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_directedness(vertex_count, Directedness::Undirected)
    }

    /// A directed graph on `vertex_count` vertices with no edges.
    pub fn directed(vertex_count: usize) -> Self {
        Self::with_directedness(vertex_count, Directedness::Directed)
    }

    /// # Panics
    ///
    /// If `vertex_count` exceeds [`MAX_VERTICES`] or the matrix cannot be
    /// allocated. [`Graph::try_with_directedness`] reports the former instead.
    pub fn with_directedness(vertex_count: usize, directedness: Directedness) -> Self {
        Graph {
            vertex_count,
            directedness,
            // saturates so an oversized count fails the allocation instead of wrapping
            cells: vec![W::ZERO; vertex_count.saturating_mul(vertex_count)],
        }
    }

    pub fn try_with_directedness(
        vertex_count: usize,
        directedness: Directedness,
    ) -> Result<Self, GraphError> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::MatrixTooLarge {
                vertex_count,
                max: MAX_VERTICES,
            });
        }
        Ok(Self::with_directedness(vertex_count, directedness))
    }

    /// Builds an undirected graph from a signed vertex count, rejecting
    /// negative counts and counts whose matrix size overflows. Zero is allowed
    /// and yields the empty graph.
    pub fn try_from_signed(vertex_count: i64) -> Result<Self, GraphError> {
        if vertex_count < 0 {
            return Err(GraphError::NegativeVertexCount(vertex_count));
        }
        let n = usize::try_from(vertex_count).unwrap_or(usize::MAX);
        Self::try_with_directedness(n, Directedness::Undirected)
    }

    /// The complete graph `K_n`: every pair `i < j` joined by an unweighted edge.
    pub fn complete(vertex_count: usize) -> Self {
        let mut graph = Self::new(vertex_count);
        graph.generate_complete_graph();
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    fn contains(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertexIndex {
                index: vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    fn check_pair(&self, src: usize, dst: usize) -> Result<(), GraphError> {
        self.check(src)?;
        self.check(dst)?;
        if src == dst {
            return Err(GraphError::SelfLoop(src));
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.vertex_count + col
    }

    /// Raw cell read. Indices must be in range.
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> W {
        self.cells[self.offset(row, col)]
    }

    /// Raw cell write, no mirroring. Indices must be in range.
    #[inline]
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: W) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    fn write_edge(&mut self, src: usize, dst: usize, value: W) {
        self.set_cell(src, dst, value);
        if !self.is_directed() {
            self.set_cell(dst, src, value);
        }
    }

    /// Adds an unweighted edge. Out-of-range vertices and self-loops are ignored.
    pub fn add_edge(&mut self, src: usize, dst: usize) {
        self.add_weighted_edge(src, dst, W::ONE);
    }

    /// Stores `weight` on the edge `src -> dst` (both cells when undirected).
    ///
    /// A zero weight clears the edge. Out-of-range vertices, self-loops and
    /// negative weights are ignored.
    pub fn add_weighted_edge(&mut self, src: usize, dst: usize, weight: W) {
        if weight.is_negative() {
            return;
        }
        if self.check_pair(src, dst).is_ok() {
            self.write_edge(src, dst, weight);
        }
    }

    /// Clears the edge. Out-of-range vertices are ignored.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if self.check_pair(src, dst).is_ok() {
            self.write_edge(src, dst, W::ZERO);
        }
    }

    /// True iff the stored cell is exactly an unweighted edge.
    ///
    /// Weighted edges (value > 1) are deliberately not reported. Out-of-range
    /// vertices yield `false`.
    pub fn is_edge(&self, src: usize, dst: usize) -> bool {
        self.contains(src) && self.contains(dst) && self.cell(src, dst).is_unit()
    }

    /// The stored cell value, or `None` if either vertex is out of range.
    pub fn weight(&self, src: usize, dst: usize) -> Option<W> {
        (self.contains(src) && self.contains(dst)).then(|| self.cell(src, dst))
    }

    pub fn try_add_edge(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        self.try_add_weighted_edge(src, dst, W::ONE)
    }

    pub fn try_add_weighted_edge(
        &mut self,
        src: usize,
        dst: usize,
        weight: W,
    ) -> Result<(), GraphError> {
        self.check_pair(src, dst)?;
        if weight.is_negative() {
            return Err(GraphError::InvalidWeight(weight.to_string()));
        }
        self.write_edge(src, dst, weight);
        Ok(())
    }

    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        self.check_pair(src, dst)?;
        self.write_edge(src, dst, W::ZERO);
        Ok(())
    }

    pub fn try_is_edge(&self, src: usize, dst: usize) -> Result<bool, GraphError> {
        self.check(src)?;
        self.check(dst)?;
        Ok(self.cell(src, dst).is_unit())
    }

    /// Joins every pair `i < j` with an unweighted edge.
    pub fn generate_complete_graph(&mut self) {
        for i in 0..self.vertex_count {
            for j in (i + 1)..self.vertex_count {
                self.add_edge(i, j);
            }
        }
    }

    /// Vertices `u` with `is_edge(vertex, u)`, in ascending order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count).filter(move |&u| self.is_edge(vertex, u))
    }

    /// Every stored edge as `(src, dst, weight)`.
    ///
    /// Undirected edges are reported once, with `src < dst`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let directed = self.is_directed();
        (0..self.vertex_count)
            .flat_map(move |i| {
                let start = if directed { 0 } else { i + 1 };
                (start..self.vertex_count).map(move |j| (i, j))
            })
            .filter_map(|(i, j)| {
                let w = self.cell(i, j);
                w.is_present().then_some((i, j, w))
            })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// The matrix as nested rows.
    pub fn rows(&self) -> Vec<Vec<W>> {
        if self.vertex_count == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.vertex_count)
            .map(<[W]>::to_vec)
            .collect()
    }
}

impl<W: EdgeWeight> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.vertex_count {
            writeln!(
                f,
                "{}",
                (0..self.vertex_count).map(|j| self.cell(i, j)).join(" ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_clears_both_cells() {
        let mut g: Graph = Graph::new(4);
        g.add_edge(0, 1);
        assert!(g.is_edge(0, 1));
        assert!(g.is_edge(1, 0));

        g.remove_edge(0, 1);
        assert!(!g.is_edge(0, 1));
        assert!(!g.is_edge(1, 0));
        assert_eq!(g, Graph::new(4));
    }

    #[test]
    fn directed_writes_one_cell() {
        let mut g: Graph = Graph::directed(3);
        g.add_edge(0, 2);
        assert!(g.is_edge(0, 2));
        assert!(!g.is_edge(2, 0));
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 2, 1)]);
    }

    #[test]
    fn out_of_range_is_silently_ignored() {
        let mut g: Graph = Graph::new(3);
        g.add_edge(0, 3);
        g.add_edge(5, 1);
        g.remove_edge(9, 9);
        assert_eq!(g, Graph::new(3));
        assert!(!g.is_edge(0, 3));
        assert_eq!(g.weight(3, 0), None);
    }

    #[test]
    fn strict_api_reports_bounds() {
        let mut g: Graph = Graph::new(3);
        assert_eq!(
            g.try_add_edge(0, 3),
            Err(GraphError::InvalidVertexIndex {
                index: 3,
                vertex_count: 3
            })
        );
        assert_eq!(g.try_add_edge(1, 1), Err(GraphError::SelfLoop(1)));
        assert_eq!(
            g.try_add_weighted_edge(0, 1, -4),
            Err(GraphError::InvalidWeight("-4".into()))
        );
        assert_eq!(g.try_add_edge(0, 1), Ok(()));
        assert_eq!(g.try_is_edge(1, 0), Ok(true));
        assert_eq!(g.try_remove_edge(1, 0), Ok(()));
        assert_eq!(g.try_is_edge(0, 1), Ok(false));
        assert!(g.try_is_edge(0, 4).is_err());
    }

    #[test]
    fn self_loops_never_touch_the_diagonal() {
        let mut g: Graph = Graph::new(2);
        g.add_edge(1, 1);
        assert_eq!(g.weight(1, 1), Some(0));
    }

    #[test]
    fn weighted_edges_are_not_unit_edges() {
        let mut g: Graph<i64> = Graph::new(3);
        g.add_weighted_edge(0, 1, 7);
        assert_eq!(g.weight(1, 0), Some(7));
        assert!(!g.is_edge(0, 1));
        assert_eq!(g.edge_count(), 1);

        g.add_weighted_edge(0, 1, -2);
        assert_eq!(g.weight(0, 1), Some(7));

        g.add_weighted_edge(0, 1, 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn negative_vertex_count_is_rejected() {
        assert_eq!(
            Graph::<i32>::try_from_signed(-2),
            Err(GraphError::NegativeVertexCount(-2))
        );
        let empty = Graph::<i32>::try_from_signed(0).unwrap();
        assert_eq!(empty.vertex_count(), 0);
        assert!(empty.rows().is_empty());
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        assert_eq!(
            Graph::<i32>::try_from_signed(1 << 40),
            Err(GraphError::MatrixTooLarge {
                vertex_count: usize::try_from(1i64 << 40).unwrap_or(usize::MAX),
                max: MAX_VERTICES,
            })
        );
        assert!(MAX_VERTICES.checked_mul(MAX_VERTICES).is_some());
        assert!((MAX_VERTICES + 1).checked_mul(MAX_VERTICES + 1).is_none());
        assert!(Graph::<i32>::try_with_directedness(4, Directedness::Directed).is_ok());
    }

    #[test]
    fn equality_is_structural() {
        let mut a: Graph = Graph::new(3);
        let mut b: Graph = Graph::new(3);
        a.add_edge(0, 1);
        b.add_edge(1, 0);
        assert_eq!(a, b);

        b.add_weighted_edge(1, 2, 3);
        assert_ne!(a, b);
        assert_ne!(Graph::<i32>::new(3), Graph::<i32>::new(4));
        assert_ne!(Graph::<i32>::new(3), Graph::<i32>::directed(3));
    }

    #[test]
    fn complete_graph_edges_and_neighbors() {
        let k4: Graph = Graph::complete(4);
        assert_eq!(k4.edge_count(), 6);
        assert_eq!(k4.neighbors(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        for i in 0..4 {
            assert!(!k4.is_edge(i, i));
        }
    }

    #[test]
    fn display_prints_rows() {
        let mut g: Graph = Graph::new(3);
        g.add_edge(0, 1);
        g.add_weighted_edge(1, 2, 4);
        insta::assert_snapshot!(g.to_string().trim_end(), @r"
        0 1 0
        1 0 4
        0 4 0
        ");
    }
}
