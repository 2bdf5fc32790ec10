// Main library module for Lockd - a named lock service over a transactional key-value store
// Handlers, configuration, and startup wiring live here; lock semantics live in lockd-core

// Module declarations
pub mod api; // HTTP API handlers and models
pub mod console; // Health and metrics endpoints
pub mod metrics; // Metrics and observability
pub mod model; // Configuration, state, and response types
pub mod startup; // Application startup utilities

// Re-export commonly used types at the crate level
pub use model::{AppState, Configuration};
