//! Property-based tests for the graph-analysis core.
//!
//! These verify the invariants the algorithms promise for any graph:
//! - walk paths stay within bounds and on edges
//! - seeded walks are deterministic
//! - rankings are permutations, weakly decreasing in in-degree

use graphwalk::rng::seeded;
use graphwalk::{random_walk_with, vertices_by_in_degree, AdjacencyMap, Error, Graph};
use proptest::prelude::*;

/// Arbitrary small graph: directed and undirected edges over vertices 0..8.
fn arb_graph() -> impl Strategy<Value = AdjacencyMap<u8, ()>> {
    let edge = (0u8..8, 0u8..8, any::<bool>());
    proptest::collection::vec(edge, 0..40).prop_map(|edges| {
        let mut g = AdjacencyMap::new();
        for (a, b, undirected) in edges {
            if undirected {
                g.insert_undirected(a, b, ());
            } else {
                g.insert_directed(a, b, ());
            }
        }
        g
    })
}

mod walk_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn path_is_bounded_and_starts_at_start(
            mut g in arb_graph(),
            start in 0u8..8,
            steps in 0usize..16,
            seed in any::<u64>(),
        ) {
            g.insert_vertex(start);

            let path = random_walk_with(&g, &start, steps, &mut seeded(seed)).unwrap();
            prop_assert!(!path.is_empty());
            prop_assert!(path.len() <= steps + 1);
            prop_assert_eq!(path[0], start);
        }

        #[test]
        fn consecutive_path_entries_are_edges(
            mut g in arb_graph(),
            start in 0u8..8,
            steps in 0usize..16,
            seed in any::<u64>(),
        ) {
            g.insert_vertex(start);

            let path = random_walk_with(&g, &start, steps, &mut seeded(seed)).unwrap();
            for pair in path.windows(2) {
                prop_assert!(
                    g.has_edge(&pair[0], &pair[1]),
                    "no edge {} -> {}", pair[0], pair[1]
                );
            }
        }

        #[test]
        fn seeded_walks_are_deterministic(
            mut g in arb_graph(),
            start in 0u8..8,
            steps in 0usize..16,
            seed in any::<u64>(),
        ) {
            g.insert_vertex(start);

            let a = random_walk_with(&g, &start, steps, &mut seeded(seed)).unwrap();
            let b = random_walk_with(&g, &start, steps, &mut seeded(seed)).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn zero_steps_yields_only_start(
            mut g in arb_graph(),
            start in 0u8..8,
            seed in any::<u64>(),
        ) {
            g.insert_vertex(start);

            let path = random_walk_with(&g, &start, 0, &mut seeded(seed)).unwrap();
            prop_assert_eq!(path, vec![start]);
        }

        #[test]
        fn start_outside_graph_is_unknown(
            g in arb_graph(),
            steps in 0usize..16,
            seed in any::<u64>(),
        ) {
            // Vertices only ever come from 0..8.
            let result = random_walk_with(&g, &200u8, steps, &mut seeded(seed));
            prop_assert!(matches!(result, Err(Error::UnknownStart)));
        }
    }
}

mod rank_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn ranking_is_a_permutation_of_vertices(g in arb_graph()) {
            let mut ranked = vertices_by_in_degree(&g);
            let mut vertices: Vec<u8> = g.vertices().collect();
            ranked.sort_unstable();
            vertices.sort_unstable();
            prop_assert_eq!(ranked, vertices);
        }

        #[test]
        fn ranking_is_weakly_decreasing(g in arb_graph()) {
            let ranked = vertices_by_in_degree(&g);
            for pair in ranked.windows(2) {
                prop_assert!(
                    g.in_degree(&pair[0]) >= g.in_degree(&pair[1]),
                    "in-degree increased: {} before {}", pair[0], pair[1]
                );
            }
        }

        #[test]
        fn equal_degrees_keep_enumeration_order(g in arb_graph()) {
            let ranked = vertices_by_in_degree(&g);
            let positions: Vec<usize> = g
                .vertices()
                .map(|v| ranked.iter().position(|r| *r == v).unwrap())
                .collect();

            // Among vertices with the same in-degree, enumeration order and
            // ranking order must agree.
            let vertices: Vec<u8> = g.vertices().collect();
            for (i, a) in vertices.iter().enumerate() {
                for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                    if g.in_degree(a) == g.in_degree(b) {
                        prop_assert!(positions[i] < positions[j]);
                    }
                }
            }
        }
    }
}

#[test]
fn empty_graph_ranks_empty() {
    let g: AdjacencyMap<u8, ()> = AdjacencyMap::new();
    assert!(vertices_by_in_degree(&g).is_empty());
}
