//! Error types for omega-topology.

use thiserror::Error;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a network or querying routes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested node count cannot form an Omega network.
    ///
    /// Raised at construction only; no partial network is produced.
    #[error("invalid topology: node count must be a positive power of two, got {nodes}")]
    InvalidTopology { nodes: u64 },

    /// An endpoint lies outside the network's address space.
    ///
    /// Raised per call; the network remains valid for subsequent queries.
    #[error("{role} {node} out of range for a network of {nodes} nodes")]
    OutOfRange {
        /// Which argument was rejected ("source" or "destination").
        role: &'static str,
        node: u64,
        nodes: u64,
    },
}
