//! Error types for the fallible collection terminals
//!
//! The core stages and terminals never fail. Only the configurable
//! collectors (`to_vec_with`, `to_map_with`) return a [`StreamResult`].

use thiserror::Error;

/// Main error type for lazy-stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A key was produced twice while collecting with a rejecting policy.
    /// `index` counts produced elements from zero.
    #[error("duplicate key at element {index}")]
    DuplicateKey { index: usize },
    /// The collection configuration is inconsistent
    #[error("invalid collect configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for lazy-stream operations
pub type StreamResult<T> = Result<T, StreamError>;
