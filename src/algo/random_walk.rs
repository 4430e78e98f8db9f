//! Bounded uniform random walk.
//!
//! A walk of up to `steps` edges starting from a given vertex. At each step
//! the out-neighbors of the current vertex are materialized into a snapshot
//! and one is drawn uniformly at random; a vertex with no out-neighbors
//! ends the walk early. Materializing the snapshot before indexing isolates
//! the draw from the graph's iteration strategy, so the sampler can be
//! faked for deterministic tests.

use crate::rng::{default_sampler, IndexSampler};
use crate::{Error, Graph, Result};

/// Take a random walk from `start`, traversing at most `steps` edges.
///
/// Uses the thread-local RNG. For reproducible walks, call
/// [`random_walk_with`] with a sampler from [`crate::rng::seeded`].
///
/// # Errors
/// Returns [`Error::UnknownStart`] when `start` is not in the graph.
pub fn random_walk<G: Graph>(g: &G, start: &G::Vertex, steps: usize) -> Result<Vec<G::Vertex>> {
    random_walk_with(g, start, steps, &mut default_sampler())
}

/// Take a random walk from `start` using an injected sampler.
///
/// The returned path begins with `start` and has between 1 and `steps + 1`
/// vertices; each consecutive pair was an out-edge at the moment it was
/// sampled. The walk stops early at a vertex with no out-neighbors, or if
/// a chosen neighbor turns out not to be a graph member itself.
///
/// # Example
///
/// ```
/// use graphwalk::{random_walk_with, rng::seeded, AdjacencyMap};
///
/// let mut g = AdjacencyMap::new();
/// g.insert_undirected("A", "B", "e");
///
/// let path = random_walk_with(&g, &"A", 3, &mut seeded(42)).unwrap();
/// assert_eq!(path, vec!["A", "B", "A", "B"]);
/// ```
///
/// # Errors
/// Returns [`Error::UnknownStart`] when `start` is not in the graph, and
/// [`Error::SampleOutOfRange`] when the sampler draws an index outside the
/// neighbor snapshot.
pub fn random_walk_with<G, S>(
    g: &G,
    start: &G::Vertex,
    steps: usize,
    sampler: &mut S,
) -> Result<Vec<G::Vertex>>
where
    G: Graph,
    S: IndexSampler,
{
    if !g.contains(start) {
        return Err(Error::UnknownStart);
    }

    // Don't pre-reserve unbounded caller-controlled capacity.
    let mut path = Vec::with_capacity(steps.saturating_add(1).min(1024));
    path.push(start.clone());
    let mut current = start.clone();

    for _ in 0..steps {
        // Absent mid-walk means a chosen neighbor was not itself a member;
        // a well-formed graph reports empty instead.
        let Some(neighbors_iter) = g.out_neighbors(&current) else {
            break;
        };
        let mut neighbors: Vec<G::Vertex> = neighbors_iter.collect();
        if neighbors.is_empty() {
            break;
        }

        let len = neighbors.len();
        let j = sampler.draw(len);
        if j >= len {
            return Err(Error::SampleOutOfRange { index: j, len });
        }
        current = neighbors.swap_remove(j);
        path.push(current.clone());
    }

    Ok(path)
}
