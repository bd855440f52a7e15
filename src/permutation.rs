//! # Orderings
//!
//! Every arrangement of a vertex subset is produced by sorting it and then
//! stepping with [`next_permutation`] until the sequence wraps around. The
//! orderings therefore come out in strictly increasing lexicographic order and
//! there are exactly `k!` of them.
//!
//! ```
//! use cyclenum::permutation::Orderings;
//!
//! let all: Vec<_> = Orderings::new(vec![2, 0, 1]).collect();
//! assert_eq!(all.len(), 6);
//! assert_eq!(all[0], vec![0, 1, 2]);
//! assert_eq!(all[5], vec![2, 1, 0]);
//! ```

use std::iter::FusedIterator;

/// Rearranges `items` into the lexicographically next permutation.
///
/// Returns `false` when `items` was already the largest arrangement; in that
/// case `items` wraps to the smallest arrangement (sorted ascending).
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let pivot = i - 1;
    // Rightmost successor to pivot
    let mut j = items.len() - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

/// `k!`, or `None` on overflow.
pub fn factorial(k: usize) -> Option<usize> {
    (2..=k).try_fold(1usize, |acc, i| acc.checked_mul(i))
}

/// All orderings of a set of items, lexicographically ascending.
///
/// Items are expected to be distinct (vertex indices always are); repeated
/// items would collapse equal arrangements.
#[derive(Debug, Clone)]
pub struct Orderings<T = usize> {
    current: Vec<T>,
    done: bool,
}

impl<T: Ord + Clone> Orderings<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_unstable();
        Orderings {
            current: items,
            done: false,
        }
    }
}

impl Orderings<usize> {
    /// Every ordering of the whole vertex range `0..n`.
    pub fn of_range(n: usize) -> Self {
        Orderings::new((0..n).collect())
    }
}

impl<T: Ord + Clone> Iterator for Orderings<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current.clone();
        if !next_permutation(&mut self.current) {
            self.done = true;
        }
        Some(out)
    }
}

impl<T: Ord + Clone> FusedIterator for Orderings<T> {}
