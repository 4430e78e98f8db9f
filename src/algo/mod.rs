//! Graph-analysis algorithms consuming the [`Graph`](crate::Graph) capability.

/// Bounded uniform random walk.
pub mod random_walk;

/// Ranking vertices by in-degree.
pub mod rank;
