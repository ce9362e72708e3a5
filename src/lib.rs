//! Web front end for a psychomotor vigilance (reaction time) test.
//!
//! Requests are dispatched through an immutable [`routing::RouteTable`]
//! built once at startup and shared by every request task.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{url_patterns, RouteTable};
