// Console endpoints for operating the server
// Health probes and the Prometheus scrape endpoint live here

pub mod health;
pub mod metrics;
