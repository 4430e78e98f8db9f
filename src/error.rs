//! Error types for graph analysis operations.

use thiserror::Error;

/// Errors that can occur during graph analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// The starting vertex of a walk is not a member of the graph.
    ///
    /// Never used for a start vertex with no outgoing edges; that is a
    /// legitimate one-element walk, not a failure.
    #[error("start vertex is not in the graph")]
    UnknownStart,
    /// An injected sampler drew an index outside the neighbor snapshot.
    #[error("sampler drew index {index} for a neighbor set of size {len}")]
    SampleOutOfRange {
        /// The index the sampler returned.
        index: usize,
        /// The size of the neighbor snapshot it was asked to draw from.
        len: usize,
    },
    /// IO error while loading a graph from a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON error while loading an adjacency-list file.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for graphwalk.
pub type Result<T> = std::result::Result<T, Error>;
