//! # Candidate orderings
//!
//! [`CandidateOrderings`] is the search space of the brute-force cycle finder:
//! every ordering of every vertex subset of size `3..=n`. It is lazy, so the
//! `Σ C(n,k)·k!` candidates are never held in memory at once, and restartable
//! by simply constructing it again.

use std::iter::FusedIterator;

use crate::{
    combination::{binomial, Subsets},
    permutation::{factorial, Orderings},
    MIN_CYCLE_LEN,
};

#[derive(Debug, Clone)]
pub struct CandidateOrderings {
    subsets: Subsets,
    current: Option<Orderings>,
}

impl CandidateOrderings {
    pub fn new(vertex_count: usize) -> Self {
        CandidateOrderings {
            subsets: Subsets::new(vertex_count),
            current: None,
        }
    }
}

impl Iterator for CandidateOrderings {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ordering) = self.current.as_mut().and_then(Iterator::next) {
                return Some(ordering);
            }
            self.current = Some(Orderings::new(self.subsets.next()?));
        }
    }
}

impl FusedIterator for CandidateOrderings {}

pub fn candidate_orderings(vertex_count: usize) -> CandidateOrderings {
    CandidateOrderings::new(vertex_count)
}

/// `Σ_{k=3}^{n} C(n, k)·k!`, or `None` on overflow.
pub fn candidate_count(vertex_count: usize) -> Option<usize> {
    (MIN_CYCLE_LEN..=vertex_count).try_fold(0usize, |acc, k| {
        let per_size = binomial(vertex_count, k)?.checked_mul(factorial(k)?)?;
        acc.checked_add(per_size)
    })
}
