//! Application startup utilities module.
//!
//! This module contains the HTTP server wiring, logging setup, store
//! construction, and graceful shutdown handling used by the server
//! binary.

mod http;
mod logging;
mod shutdown;
mod store;

pub use http::main_server;
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{GracefulShutdown, ShutdownSignal, wait_for_shutdown_signal};
pub use store::{StoreBackend, build_store};
