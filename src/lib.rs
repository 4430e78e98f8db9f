//! Generic graph-analysis core: bounded random walks and in-degree ranking
//! over a caller-supplied graph capability.
//!
//! The crate is intentionally small. Its surface is two algorithms plus the
//! [`Graph`] contract they consume:
//!
//! - [`random_walk`] / [`random_walk_with`] — forward traversal of up to
//!   `steps` edges, choosing uniformly among out-neighbors at each step.
//! - [`vertices_by_in_degree`] — all vertices, descending by in-degree,
//!   stable on ties.
//!
//! Randomness goes through the [`rng::IndexSampler`] seam so walks are
//! reproducible under test. The algorithms perform no I/O and never mutate
//! the graph.
//!
//! # Example
//!
//! ```
//! use graphwalk::{random_walk_with, rng::seeded, vertices_by_in_degree, AdjacencyMap};
//!
//! let mut g = AdjacencyMap::new();
//! g.insert_undirected("A", "B", "road");
//! g.insert_directed("B", "C", "rail");
//!
//! let path = random_walk_with(&g, &"A", 4, &mut seeded(7)).unwrap();
//! assert_eq!(path[0], "A");
//! assert!(path.len() <= 5);
//!
//! let ranked = vertices_by_in_degree(&g);
//! assert_eq!(ranked.len(), 3);
//! ```

#![allow(clippy::must_use_candidate)]

pub mod adjacency;
pub mod algo;
mod error;
pub mod graph;
#[cfg(feature = "petgraph")]
mod petgraph_impl;
pub mod rng;

pub use adjacency::AdjacencyMap;
pub use algo::random_walk::{random_walk, random_walk_with};
pub use algo::rank::vertices_by_in_degree;
pub use error::{Error, Result};
pub use graph::Graph;
pub use rng::{seeded, FixedSampler, IndexSampler, RngSampler, ScriptedSampler, SeededSampler};

// Re-export petgraph so capability impl and caller use the same version.
#[cfg(feature = "petgraph")]
pub use petgraph;
