//! Request handlers bound to routes.
//!
//! # Responsibilities
//! - Turn a dispatched request into a response
//! - Link between pages through reverse lookups, never hard-coded paths
//!
//! # Design Decisions
//! - Views are bound to routes when the table is built, not looked up by name
//! - Views are synchronous: they serve fixed documents and never block
//! - Scoring runs in the browser; views carry no test state

mod reaction_test;
mod test_complete;

use axum::response::Response;

use crate::routing::RouteTable;

pub use reaction_test::ReactionTest;
pub use test_complete::TestComplete;

/// URL prefix the HTTP layer serves browser assets under.
pub const STATIC_URL: &str = "/static";

/// A request-handling capability bound to a route.
pub trait View: Send + Sync + std::fmt::Debug {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Produce the response for a dispatched request.
    fn render(&self, ctx: &ViewContext<'_>) -> Response;
}

/// Per-request data handed to a view.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    routes: &'a RouteTable,
    request_id: Option<&'a str>,
}

impl<'a> ViewContext<'a> {
    pub fn new(routes: &'a RouteTable, request_id: Option<&'a str>) -> Self {
        Self { routes, request_id }
    }

    pub fn routes(&self) -> &'a RouteTable {
        self.routes
    }

    pub fn request_id(&self) -> Option<&'a str> {
        self.request_id
    }

    /// URL of the named route, or the site root when the table lacks it.
    pub fn url_for(&self, name: &str) -> String {
        self.routes.reverse(name).unwrap_or_else(|| {
            tracing::warn!(route = %name, "Reverse lookup failed, linking to root");
            "/".to_string()
        })
    }
}
