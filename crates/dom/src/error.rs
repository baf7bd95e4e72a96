//! Error types for document operations
//!
//! Flat hierarchy, nothing clever.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(u32),

    #[error("Node {0} is not an element")]
    NotAnElement(u32),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
