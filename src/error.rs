//! Error types for the checked graph operations.

use thiserror::Error;

use crate::node::*;

/// Errors returned by the `checked_*` family of graph operations.
///
/// The unchecked operations panic in exactly the situations where their checked twin
/// returns an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node id was not in `0..num_nodes`.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: NumNodes },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
