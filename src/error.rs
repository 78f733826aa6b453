//! Error type shared by all fallible operations of the crate.

use std::convert::Infallible;

use thiserror::Error;

use crate::NumNodes;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

/// Everything that can go wrong when building, querying or (de)serializing a graph.
///
/// Errors are reported before any caller-visible state is changed.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A graph was requested with fewer than [`crate::MIN_NODES`] nodes, or with more nodes than the
    /// triangular bit array can address.
    #[error("Invalid graph size {0}. Too small or too large graph")]
    InvalidSize(NumNodes),

    /// An adjacency matrix that is not square or too small.
    #[error("Invalid adjacency matrix: {0}")]
    InvalidMatrix(String),

    /// A node index outside of `0..count`.
    #[error("No vertex {index} in a graph with {count} vertices")]
    OutOfRange { index: i64, count: NumNodes },

    /// Malformed textual input, or a graph that cannot be rendered in the requested format.
    #[error("Invalid format. {0}")]
    Format(String),

    /// Underlying reader/writer failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<Infallible> for GraphError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl GraphError {
    /// Shorthand for [`GraphError::OutOfRange`] from any integer index
    pub fn out_of_range(index: impl Into<i64>, count: NumNodes) -> Self {
        GraphError::OutOfRange {
            index: index.into(),
            count,
        }
    }
}
