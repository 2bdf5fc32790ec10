// Metrics module for observability
// Provides counters and histograms for monitoring lock traffic

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and register all metric descriptions
/// Should be called once at application startup
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Lock endpoint metrics
    describe_counter!(
        "lockd_lock_requests_total",
        "Total number of lock requests received"
    );
    describe_histogram!(
        "lockd_lock_request_duration_seconds",
        "Lock request duration in seconds"
    );
    describe_counter!(
        "lockd_lock_errors_total",
        "Total number of lock requests that failed"
    );

    tracing::info!("Metrics initialized");

    Ok(handle)
}

/// Record a completed lock request
pub fn record_lock_request(operation: &str, acquired: bool, duration_secs: f64) {
    counter!("lockd_lock_requests_total", "operation" => operation.to_string(), "acquired" => acquired.to_string()).increment(1);
    histogram!("lockd_lock_request_duration_seconds", "operation" => operation.to_string()).record(duration_secs);
}

/// Record a failed lock request
pub fn record_lock_error(kind: &str) {
    counter!("lockd_lock_errors_total", "kind" => kind.to_string()).increment(1);
}

/// Timer helper for measuring operation duration
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
