use proptest::prelude::*;

use super::*;
use crate::{enumerate::candidate_orderings, subgraph::generate_subgraphs};

fn path(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for i in 1..n {
        g.add_edge(i - 1, i);
    }
    g
}

fn ring(n: usize) -> Graph {
    let mut g = path(n);
    g.add_edge(n - 1, 0);
    g
}

#[test]
fn complete_k5_every_candidate_is_a_cycle() {
    let k5: Graph = Graph::complete(5);
    // 10·3! + 5·4! + 1·5!
    assert_eq!(count_cycles(&k5), 60 + 120 + 120);
    assert_eq!(cycles(&k5).count(), 300);
}

#[test]
fn open_path_has_no_cycles() {
    let g = path(3);
    assert!(!is_cycle(&g, &[0, 1, 2]));
    assert_eq!(count_cycles(&g), 0);
}

#[test]
fn triangle_orderings() {
    let g = ring(3);
    assert!(is_cycle(&g, &[0, 1, 2]));
    assert!(is_cycle(&g, &[2, 1, 0]));
    assert_eq!(count_cycles(&g), 6);
}

#[test]
fn square_with_chord() {
    let mut g = ring(4);
    g.add_edge(0, 2);

    let found: Vec<_> = cycles(&g).collect();
    // two triangles (6 orderings each) and the square (8 orderings)
    assert_eq!(found.len(), 6 + 6 + 8);
    assert!(found.contains(&vec![0, 1, 2]));
    assert!(found.contains(&vec![0, 2, 3]));
    assert!(found.contains(&vec![0, 3, 2, 1]));
    assert!(!found.contains(&vec![1, 2, 3]));

    assert_eq!(
        distinct_cycles(&g).into_iter().collect::<Vec<_>>(),
        vec![vec![0, 1, 2], vec![0, 1, 2, 3], vec![0, 2, 3]]
    );
}

#[test]
fn weighted_edges_break_cycles() {
    let mut g: Graph<i64> = Graph::complete(3);
    assert!(is_cycle(&g, &[0, 1, 2]));
    g.add_weighted_edge(1, 2, 5);
    assert!(!is_cycle(&g, &[0, 1, 2]));
    assert_eq!(count_cycles(&g), 0);
}

#[test]
fn short_orderings_are_not_cycles() {
    let g: Graph = Graph::complete(3);
    assert!(!is_cycle(&g, &[]));
    assert!(!is_cycle(&g, &[0]));
    assert!(!is_cycle(&g, &[0, 1]));
}

#[test]
fn out_of_range_ordering_is_not_a_cycle() {
    let g: Graph = Graph::complete(3);
    assert!(!is_cycle(&g, &[0, 1, 7]));
}

#[test]
fn directed_cycles_respect_orientation() {
    let mut g: Graph = Graph::directed(3);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 0);

    assert!(is_cycle(&g, &[0, 1, 2]));
    assert!(is_cycle(&g, &[1, 2, 0]));
    assert!(!is_cycle(&g, &[0, 2, 1]));
    assert_eq!(count_cycles(&g), 3);
    assert_eq!(distinct_cycles(&g).len(), 1);
}

#[test]
fn distinct_cycles_of_k5() {
    // 10 triangles, 15 squares, 12 pentagons
    assert_eq!(distinct_cycles(&Graph::<i32>::complete(5)).len(), 37);
}

#[test]
fn canonical_forms() {
    assert_eq!(
        canonical_cycle(&[2, 3, 0, 1], Directedness::Undirected),
        vec![0, 1, 2, 3]
    );
    assert_eq!(
        canonical_cycle(&[2, 1, 0, 3], Directedness::Undirected),
        vec![0, 1, 2, 3]
    );
    assert_eq!(
        canonical_cycle(&[2, 1, 0, 3], Directedness::Directed),
        vec![0, 3, 2, 1]
    );
}

#[test]
fn full_range_counts_hamiltonian_cycles_only() {
    assert_eq!(count_cycles_in_range(&Graph::<i32>::complete(4)), 24);
    assert_eq!(count_cycles_in_range(&ring(5)), 10);
    assert_eq!(count_cycles_in_range(&path(5)), 0);
    assert_eq!(count_cycles_in_range(&Graph::<i32>::complete(2)), 0);
}

#[test]
fn degenerate_graphs_find_nothing() {
    assert_eq!(count_cycles(&Graph::<i32>::new(0)), 0);
    assert_eq!(count_cycles(&Graph::<i32>::complete(2)), 0);
    assert!(!traversal_closes(&Graph::<i32>::new(0)));
}

#[test]
fn traversal_closes_on_rings() {
    assert!(traversal_closes(&ring(3)));
    assert!(traversal_closes(&ring(6)));
    assert!(traversal_closes(&Graph::<i32>::complete(4)));
}

#[test]
fn traversal_is_coarse_on_paths() {
    // the walk from the last vertex looks back at its parent with everything visited
    assert!(traversal_closes(&path(3)));
    assert!(!is_cycle(&path(3), &[0, 1, 2]));
}

#[test]
fn traversal_needs_every_vertex() {
    // triangle plus an isolated vertex
    let mut g: Graph = Graph::new(4);
    for (i, j, _) in ring(3).edges() {
        g.add_edge(i, j);
    }
    assert!(!traversal_closes(&g));
    assert!(!traversal_closes(&Graph::<i32>::new(1)));
    assert!(!traversal_closes(&Graph::<i32>::new(3)));
}

#[test]
fn traversal_over_all_subsets_of_a_ring() {
    // Every subgraph induced by a proper subset of a ring is a union of paths;
    // only connected ones close under the coarse traversal.
    let g = ring(5);
    let closing: Vec<_> = generate_subgraphs(&g)
        .unwrap()
        .filter(|s| s.is_cycle())
        .map(|s| s.included().iter_ones().collect::<Vec<_>>())
        .collect();

    // 5 consecutive triples, 5 consecutive quadruples, the whole ring
    assert_eq!(closing.len(), 11);
    assert!(closing.contains(&vec![0, 1, 2]));
    assert!(closing.contains(&vec![0, 3, 4]));
    assert!(!closing.contains(&vec![0, 2, 4]));
}

proptest! {
    #[test]
    fn is_cycle_is_idempotent(edges in proptest::collection::vec((0usize..6, 0usize..6), 0..15)) {
        let mut g: Graph = Graph::new(6);
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        let first: Vec<bool> = candidate_orderings(5).map(|o| is_cycle(&g, &o)).collect();
        let second: Vec<bool> = candidate_orderings(5).map(|o| is_cycle(&g, &o)).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cycle_count_matches_canonical_classes(edges in proptest::collection::vec((0usize..5, 0usize..5), 0..10)) {
        let mut g: Graph = Graph::new(5);
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        // each undirected cycle of length k shows up as 2k orderings
        let expected: usize = distinct_cycles(&g).iter().map(|c| 2 * c.len()).sum();
        prop_assert_eq!(count_cycles(&g), expected);
    }

    #[test]
    fn is_edge_is_symmetric(edges in proptest::collection::vec((0usize..7, 0usize..7), 0..20)) {
        let mut g: Graph = Graph::new(6);
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        for i in 0..7 {
            for j in 0..7 {
                prop_assert_eq!(g.is_edge(i, j), g.is_edge(j, i));
            }
        }
    }
}
