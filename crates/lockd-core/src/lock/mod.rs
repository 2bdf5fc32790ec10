//! Named, time-bounded mutual exclusion
//!
//! This module provides:
//! - The lock row model and request types
//! - The decision engine (grant, deny, release, renew)
//! - The lock service tying decisions to a store

mod engine;
mod model;
mod service;

pub use engine::*;
pub use model::*;
pub use service::*;
