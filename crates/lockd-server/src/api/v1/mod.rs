//! V1 lock API
//!
//! The V1 API exposes a single lock endpoint that covers acquire,
//! renew, and release through its parameter shape.

pub mod lock;
pub mod model;
