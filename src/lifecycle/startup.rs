//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table
//! - Start the metrics exporter when enabled
//! - Check the static asset directory
//! - Bind the listener and construct the HTTP server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::routing::{url_patterns, RouteError, RouteTable};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error("invalid address '{0}'")]
    Address(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// A server ready to accept traffic on its bound listener.
pub struct Bootstrapped {
    pub server: HttpServer,
    pub listener: TcpListener,
}

/// Build every subsystem with the application's own routes.
pub async fn bootstrap(config: AppConfig) -> Result<Bootstrapped, StartupError> {
    let routes = url_patterns()?;
    bootstrap_with_routes(config, routes).await
}

/// Build every subsystem around an already constructed route table.
pub async fn bootstrap_with_routes(
    config: AppConfig,
    routes: RouteTable,
) -> Result<Bootstrapped, StartupError> {
    tracing::info!(routes = routes.len(), "Route table built");

    if config.observability.metrics_enabled {
        let addr = parse_addr(&config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    if !Path::new(&config.static_files.dir).is_dir() {
        tracing::warn!(
            dir = %config.static_files.dir,
            "Static directory not found, page scripts will 404"
        );
    }

    let addr = parse_addr(&config.listener.bind_address)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let server = HttpServer::new(config, Arc::new(routes));
    Ok(Bootstrapped { server, listener })
}

fn parse_addr(value: &str) -> Result<SocketAddr, StartupError> {
    value
        .parse()
        .map_err(|_| StartupError::Address(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;
    use crate::views::ReactionTest;

    #[tokio::test]
    async fn test_bootstrap_binds_ephemeral_port() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();

        let ready = bootstrap(config).await.unwrap();
        assert_ne!(ready.listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_bad_address() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "nowhere".into();

        let err = bootstrap(config).await.err().unwrap();
        assert!(matches!(err, StartupError::Address(ref a) if a == "nowhere"));
    }

    #[test]
    fn test_duplicate_routes_abort_startup() {
        let routes = RouteTable::new(vec![
            Route::new("", ReactionTest, "home"),
            Route::new("again/", ReactionTest, "home"),
        ]);
        let err: StartupError = routes.unwrap_err().into();
        assert_eq!(err.to_string(), "invalid route table: duplicate route name 'home'");
    }
}
