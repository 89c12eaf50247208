//! Host error types

use thiserror::Error;

/// Failures of the client-local preference storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is missing or disabled (e.g. private browsing)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Reading a key failed
    #[error("Failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    /// Writing a key failed (quota, security policy)
    #[error("Failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Failures of document manipulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The referenced element does not exist in the document
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The host rejected a DOM operation
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Storage failure surfaced through a host call
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
