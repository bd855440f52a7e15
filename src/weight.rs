//! # Edge weights
//!
//! Adjacency-matrix cells hold a weight: zero means "no edge", any positive
//! value is an edge carrying that weight, and unweighted edges store one.
//!
//! [`EdgeWeight`] abstracts over the signed primitive integers so a
//! [`Graph`](crate::graph::Graph) can store `i8` cells for tiny benchmark
//! graphs or `i64` cells for real weights. The `SENTINEL` constant is the
//! legacy "excluded vertex" marker, only produced or consumed at the
//! sentinel-matrix boundary of [`SubgraphView`](crate::subgraph::SubgraphView).

use duplicate::duplicate;
use std::{fmt, hash::Hash};

pub trait EdgeWeight: Copy + Eq + Ord + Hash + Default + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const ONE: Self;
    const SENTINEL: Self;

    /// Whether the cell describes an edge at all (of any weight).
    fn is_present(self) -> bool {
        self > Self::ZERO
    }

    /// Whether the cell is an unweighted edge, the only kind `is_edge` reports.
    fn is_unit(self) -> bool {
        self == Self::ONE
    }

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

duplicate! {
    [types;
        [i8];
        [i16];
        [i32];
        [i64];
        [i128];
        [isize];
        ]

    impl EdgeWeight for types {
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const SENTINEL: Self = -1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_and_presence() {
        assert!(1i32.is_unit());
        assert!(1i32.is_present());
        assert!(!5i64.is_unit());
        assert!(5i64.is_present());
        assert!(!0i8.is_present());
        assert!(!i16::SENTINEL.is_present());
        assert!(isize::SENTINEL.is_negative());
    }
}
