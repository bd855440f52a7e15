//! # Vertex subsets
//!
//! Combinations are produced the classic way: a boolean selection mask starts
//! with its first `k` positions set and is stepped through every
//! lexicographically *previous* arrangement with [`prev_permutation`]. The
//! positions of the set bits are read off as a strictly increasing index
//! sequence, so `{0, 1, 2}` comes first and `{n-3, n-2, n-1}` last.
//!
//! [`subsets`] chains the sizes `3..=n`, which is exactly the candidate-vertex
//! space of the cycle search.
//!
//! ```
//! use cyclenum::combination::Combinations;
//!
//! let all: Vec<_> = Combinations::new(4, 3).collect();
//! assert_eq!(all, vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
//! ```

use std::iter::FusedIterator;

use crate::MIN_CYCLE_LEN;

/// Rearranges `items` into the lexicographically previous permutation.
///
/// Returns `false` when `items` was already the smallest arrangement; in that
/// case `items` is left as the largest arrangement (sorted descending).
pub fn prev_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    // Longest non-decreasing suffix
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] <= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let pivot = i - 1;
    // Rightmost element strictly smaller than the pivot
    let mut j = items.len() - 1;
    while items[j] >= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

/// `C(n, k)`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: usize = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by i + 1 at this point
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    Some(acc)
}

/// All `k`-element subsets of `0..n` as strictly increasing index vectors.
#[derive(Debug, Clone)]
pub struct Combinations {
    mask: Vec<bool>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            mask: (0..n).map(|i| i < k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self
            .mask
            .iter()
            .enumerate()
            .filter_map(|(i, &selected)| selected.then_some(i))
            .collect();
        if !prev_permutation(&mut self.mask) {
            self.done = true;
        }
        Some(subset)
    }
}

impl FusedIterator for Combinations {}

/// Every subset of `0..n` with at least [`MIN_CYCLE_LEN`] elements, grouped by
/// ascending size.
#[derive(Debug, Clone)]
pub struct Subsets {
    n: usize,
    k: usize,
    current: Combinations,
}

impl Subsets {
    pub fn new(n: usize) -> Self {
        Self::with_min_size(n, MIN_CYCLE_LEN)
    }

    pub fn with_min_size(n: usize, min_size: usize) -> Self {
        Subsets {
            n,
            k: min_size,
            current: Combinations::new(n, min_size),
        }
    }

    /// The subset size currently being produced.
    pub fn size(&self) -> usize {
        self.k
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(subset) = self.current.next() {
                return Some(subset);
            }
            if self.k >= self.n {
                return None;
            }
            self.k += 1;
            self.current = Combinations::new(self.n, self.k);
        }
    }
}

impl FusedIterator for Subsets {}

/// Shorthand for [`Subsets::new`].
pub fn subsets(n: usize) -> Subsets {
    Subsets::new(n)
}

/// `Σ_{k=3}^{n} C(n, k)`, or `None` on overflow.
pub fn subset_count(n: usize) -> Option<usize> {
    (MIN_CYCLE_LEN..=n).try_fold(0usize, |acc, k| acc.checked_add(binomial(n, k)?))
}
