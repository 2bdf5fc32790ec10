//! Application state management
//!
//! This module defines the central application state shared across all handlers.

use std::sync::Arc;

use lockd_core::LockService;

use super::config::Configuration;

/// Application state shared across all handlers
pub struct AppState {
    pub configuration: Configuration,
    pub lock_service: Arc<LockService>,
}

impl AppState {
    pub fn lock_service(&self) -> &LockService {
        &self.lock_service
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("lock_service", &"<LockService>")
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            configuration: self.configuration.clone(),
            lock_service: self.lock_service.clone(),
        }
    }
}
