//! Lockd Common - Shared types and utilities
//!
//! This crate provides the foundational pieces used across all lockd
//! components:
//! - Error types
//! - Time utilities

pub mod error;
pub mod utils;

// Re-exports for convenience
pub use error::LockdError;
pub use utils::now_nanos;
