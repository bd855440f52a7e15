//! # Cyclenum
//!
//! Cyclenum finds the simple cycles of a small graph the slow, obvious way:
//! it takes every vertex subset of size `k` for `3 ≤ k ≤ n`, every ordering of
//! each subset, and keeps the orderings whose consecutive vertices (wrapping
//! around) are all joined by edges. The search space is `Σ C(n,k)·k!`, so this
//! is a benchmark and visualisation tool, usable up to roughly a dozen
//! vertices.
//!
//! - [`graph`]: adjacency-matrix [`Graph`](graph::Graph), directed or not,
//!   generic over its [`EdgeWeight`](weight::EdgeWeight) cell type.
//! - [`combination`] and [`permutation`]: the subset and ordering enumerators.
//! - [`enumerate`]: the lazy candidate stream composing both.
//! - [`cycle`]: the ordering-based and traversal-based cycle predicates.
//! - [`subgraph`]: induced subgraph views, remapping, and the two subgraph
//!   generation policies.
//! - [`generate`] and [`report`]: graph sources and CSV benchmark output.
//!
//! ```
//! use cyclenum::{cycle::count_cycles, graph::Graph};
//!
//! let k5: Graph = Graph::complete(5);
//! assert_eq!(count_cycles(&k5), 300);
//! ```

pub mod combination;
pub mod cycle;
pub mod enumerate;
pub mod error;
pub mod generate;
pub mod graph;
pub mod permutation;
pub mod report;
pub mod subgraph;
pub mod weight;

/// Shortest ordering the cycle search considers.
pub const MIN_CYCLE_LEN: usize = 3;
