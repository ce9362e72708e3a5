//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (tracing, limits, timeout, request ID)
//! - Serve browser assets under `/static`
//! - Normalize paths and dispatch through the route table
//! - Redirect to the slash-terminated path when only it resolves
//! - Observability (metrics, request IDs)

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, RoutingConfig};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::observability::metrics;
use crate::routing::RouteTable;
use crate::views::{ViewContext, STATIC_URL};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub routing: RoutingConfig,
}

/// HTTP server for the web GUI.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server dispatching through `routes`.
    pub fn new(config: AppConfig, routes: Arc<RouteTable>) -> Self {
        let state = AppState {
            routes,
            routing: config.routing.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .nest_service(STATIC_URL, ServeDir::new(&config.static_files.dir))
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = request_id(request).unwrap_or("unknown"),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Strip the single leading slash the route patterns omit and percent-decode the rest.
///
/// Paths that do not decode to UTF-8 are returned still encoded, so they match nothing.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    percent_decode_str(path)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(path))
}

/// Looks up the route for the request path and invokes its view.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&request).unwrap_or("unknown");
    let method = request.method();
    let path = normalize_path(request.uri().path());

    match state.routes.resolve(&path) {
        Ok(route) => {
            tracing::debug!(
                request_id = %request_id,
                route = route.name(),
                path = %path,
                "Dispatching request"
            );
            let ctx = ViewContext::new(&state.routes, Some(request_id));
            let response = route.view().render(&ctx);
            let status = response.status().as_u16();
            metrics::record_request(method.as_str(), status, route.name(), start_time);
            response
        }
        Err(not_found) => {
            if let Some(location) = append_slash_location(&state, method, request.uri()) {
                tracing::debug!(
                    request_id = %request_id,
                    location = %location,
                    "Redirecting to slash-terminated path"
                );
                metrics::record_request(method.as_str(), 301, metrics::NO_ROUTE, start_time);
                return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
                    .into_response();
            }

            tracing::warn!(request_id = %request_id, path = %not_found.path, "No route matched");
            metrics::record_request(method.as_str(), 404, metrics::NO_ROUTE, start_time);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

/// Redirect target for a safe request whose path resolves once a slash is appended.
fn append_slash_location(state: &AppState, method: &Method, uri: &Uri) -> Option<String> {
    if !state.routing.append_slash || !(*method == Method::GET || *method == Method::HEAD) {
        return None;
    }

    let path = uri.path();
    if path.ends_with('/') {
        return None;
    }

    let candidate = format!("{}/", normalize_path(path));
    state.routes.resolve(&candidate).ok()?;

    let mut location = format!("{path}/");
    if let Some(query) = uri.query() {
        location.push('?');
        location.push_str(query);
    }
    Some(location)
}
