// API module organization
// This module contains the HTTP API handlers and their request models

// V1 lock API
pub mod v1;
