//! Metrics collection and exposition.
//!
//! # Metrics
//! - `webgui_requests_total` (counter): requests by method, status, route
//! - `webgui_request_duration_seconds` (histogram): latency by route
//!
//! Unmatched requests are recorded under the route label `none`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label for requests that matched nothing.
pub const NO_ROUTE: &str = "none";

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    counter!(
        "webgui_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.to_string()
    )
    .increment(1);

    histogram!("webgui_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}
