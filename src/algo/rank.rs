//! Ranking vertices by in-degree.

use crate::Graph;

/// Order all vertices by in-degree, largest first.
///
/// The sort is stable: vertices with equal in-degree keep the order in
/// which [`Graph::vertices`] enumerated them, so a graph implementation
/// with deterministic enumeration yields a deterministic ranking.
/// In-degree is queried once per vertex.
///
/// An empty graph yields an empty vector.
///
/// # Example
///
/// ```
/// use graphwalk::{vertices_by_in_degree, AdjacencyMap};
///
/// let mut g = AdjacencyMap::new();
/// g.insert_directed("A", "Hub", ());
/// g.insert_directed("B", "Hub", ());
///
/// let ranked = vertices_by_in_degree(&g);
/// assert_eq!(ranked[0], "Hub");
/// ```
#[must_use]
pub fn vertices_by_in_degree<G: Graph>(g: &G) -> Vec<G::Vertex> {
    let mut ranked: Vec<(usize, G::Vertex)> =
        g.vertices().map(|v| (g.in_degree(&v), v)).collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, v)| v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjacencyMap;

    /// Demo graph: undirected A-B, A-C, B-C; directed E->B, A->D, C->D,
    /// E->C, A->E.
    fn demo_graph() -> AdjacencyMap<&'static str, &'static str> {
        let mut g = AdjacencyMap::new();
        for v in ["A", "B", "C", "D", "E"] {
            g.insert_vertex(v);
        }
        g.insert_undirected("A", "B", "undirected");
        g.insert_undirected("A", "C", "undirected");
        g.insert_undirected("B", "C", "undirected");
        g.insert_directed("E", "B", "directed");
        g.insert_directed("A", "D", "directed");
        g.insert_directed("C", "D", "directed");
        g.insert_directed("E", "C", "directed");
        g.insert_directed("A", "E", "directed");
        g
    }

    #[test]
    fn empty_graph_yields_empty_ranking() {
        let g: AdjacencyMap<&str, ()> = AdjacencyMap::new();
        assert!(vertices_by_in_degree(&g).is_empty());
    }

    #[test]
    fn demo_graph_in_degrees() {
        let g = demo_graph();
        // Each direction of an undirected edge counts toward in-degree.
        assert_eq!(g.in_degree(&"A"), 2); // B, C
        assert_eq!(g.in_degree(&"B"), 3); // A, C, E
        assert_eq!(g.in_degree(&"C"), 3); // A, B, E
        assert_eq!(g.in_degree(&"D"), 2); // A, C
        assert_eq!(g.in_degree(&"E"), 1); // A
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let g = demo_graph();
        // Degrees [3, 3, 2, 2, 1]; ties keep insertion order A,B,C,D,E.
        let ranked = vertices_by_in_degree(&g);
        assert_eq!(ranked, vec!["B", "C", "A", "D", "E"]);
    }

    #[test]
    fn ranking_is_a_permutation() {
        let g = demo_graph();
        let mut ranked = vertices_by_in_degree(&g);
        let mut vertices: Vec<_> = g.vertices().collect();
        ranked.sort_unstable();
        vertices.sort_unstable();
        assert_eq!(ranked, vertices);
    }

    #[test]
    fn isolated_vertices_rank_last_in_insertion_order() {
        let mut g: AdjacencyMap<&str, ()> = AdjacencyMap::new();
        g.insert_vertex("X");
        g.insert_vertex("Y");
        g.insert_directed("X", "Z", ());

        let ranked = vertices_by_in_degree(&g);
        assert_eq!(ranked, vec!["Z", "X", "Y"]);
    }
}
