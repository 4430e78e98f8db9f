//! The graph capability consumed by the analysis algorithms.
//!
//! The algorithms in [`crate::algo`] are generic over any read-only graph
//! view that can enumerate its vertices, report out-neighbors, and count
//! in-degree. The graph container itself lives elsewhere; this crate ships
//! [`AdjacencyMap`](crate::AdjacencyMap) as a reference implementation and,
//! behind the `petgraph` feature, an impl for `petgraph::graph::DiGraph`.

use std::hash::Hash;

/// Read-only view of a directed graph.
///
/// Undirected edges are expected to be reported symmetrically: both
/// endpoints appear in each other's out-neighbor set, and each direction
/// counts toward the in-degree of its target. The algorithms never
/// distinguish directed from undirected edges themselves.
///
/// The graph must not be mutated for the duration of an analysis call.
pub trait Graph {
    /// Opaque vertex identifier.
    type Vertex: Clone + Eq + Hash;
    /// Opaque edge label; never inspected by the algorithms.
    type Edge;

    /// Enumerate every vertex exactly once.
    ///
    /// Iteration order is implementation-defined. Callers that need a
    /// deterministic ranking should use an implementation with a stable
    /// enumeration order (e.g. insertion order).
    fn vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;

    /// Out-neighbors of `v`, or `None` when `v` is not in the graph.
    ///
    /// The distinction matters: `None` means "vertex absent", while
    /// `Some` of an empty iterator means "vertex present, no outgoing
    /// edges". The random walk fails on the former and terminates
    /// normally on the latter.
    fn out_neighbors(&self, v: &Self::Vertex)
        -> Option<Box<dyn Iterator<Item = Self::Vertex> + '_>>;

    /// Number of edges terminating at `v`; 0 when `v` is not in the graph.
    fn in_degree(&self, v: &Self::Vertex) -> usize;

    /// Whether `v` is a member of the graph.
    fn contains(&self, v: &Self::Vertex) -> bool {
        self.out_neighbors(v).is_some()
    }
}
