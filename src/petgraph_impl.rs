//! [`Graph`] capability for petgraph directed graphs.
//!
//! Enabled with the `petgraph` feature. Vertices are `NodeIndex` values;
//! node and edge weights are opaque to the algorithms.
//!
//! petgraph enumerates out-neighbors in reverse edge-insertion order, so
//! scripted walks over a `DiGraph` index into that order.

use crate::Graph;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

impl<N, E> Graph for DiGraph<N, E> {
    type Vertex = NodeIndex;
    type Edge = E;

    fn vertices(&self) -> Box<dyn Iterator<Item = NodeIndex> + '_> {
        Box::new(self.node_indices())
    }

    fn out_neighbors(&self, v: &NodeIndex) -> Option<Box<dyn Iterator<Item = NodeIndex> + '_>> {
        if self.node_weight(*v).is_none() {
            return None;
        }
        Some(Box::new(self.neighbors_directed(*v, Direction::Outgoing)))
    }

    fn in_degree(&self, v: &NodeIndex) -> usize {
        self.edges_directed(*v, Direction::Incoming).count()
    }
}
