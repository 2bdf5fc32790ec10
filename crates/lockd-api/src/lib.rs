//! Lockd API - HTTP API definitions
//!
//! This crate provides:
//! - Response models for the lock endpoint
//! - Input validation utilities

pub mod model;
pub mod validation;

// Re-export commonly used types
pub use model::*;
pub use validation::*;
