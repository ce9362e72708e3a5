//! Reaction test web GUI server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout, body limit)
//!                          │
//!                          ▼
//!                     routing::RouteTable ──▶ views::{ReactionTest, TestComplete}
//!                          │
//!                          ▼ NotFound
//!                     301 append-slash or 404
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use pvt_webgui::config::{load_config, AppConfig};
use pvt_webgui::lifecycle::{bootstrap, signals, Shutdown};
use pvt_webgui::observability::logging;
use pvt_webgui::routing::{url_patterns, RouteTable};

#[derive(Parser)]
#[command(name = "pvt-webgui")]
#[command(about = "Reaction time test web server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve HTTP traffic (default)
    Serve,
    /// Print the route table in resolution order
    Routes {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, PartialEq, Serialize)]
struct RouteEntry<'a> {
    name: &'a str,
    url: String,
    view: &'static str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Routes { json } => print_routes(json),
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability);

    tracing::info!("pvt-webgui v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        append_slash = config.routing.append_slash,
        "Configuration loaded"
    );

    let ready = bootstrap(config).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    ready.server.run(ready.listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// One entry per route, in resolution order.
fn route_entries(routes: &RouteTable) -> Vec<RouteEntry<'_>> {
    routes
        .iter()
        .map(|r| RouteEntry {
            name: r.name(),
            url: r.url(),
            view: r.view().name(),
        })
        .collect()
}

fn print_routes(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routes = url_patterns()?;
    let entries = route_entries(&routes);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{:<16} {:<20} {}", entry.name, entry.url, entry.view);
        }
    }
    Ok(())
}
