//! Data models module
//!
//! This module contains the configuration, shared state, and response
//! types used across the application.
//!
//! # Module Structure
//!
//! - `config` - Configuration management
//! - `response` - HTTP response types
//! - `app_state` - Application state shared across handlers

pub mod app_state;
pub mod config;
pub mod response;

// Re-export commonly used types at the module level
pub use app_state::AppState;
pub use config::Configuration;
pub use response::Result;
