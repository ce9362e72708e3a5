//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatch and lifecycle produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log stream
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
