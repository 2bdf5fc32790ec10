//! Error types for lockd
//!
//! This module defines `LockdError`, the application-specific error enum
//! shared by the lock engine, the storage adapters, and the HTTP layer.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum LockdError {
    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
