//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store routes in declaration order
//! - Look up the first route matching a normalized path
//! - Reverse lookup: route name to URL path
//! - Reject duplicate names and patterns at construction time
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order (first match wins)
//! - Explicit NotFound rather than silent default

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::routing::matcher::{ExactMatcher, Matcher};
use crate::views::View;

/// Errors raised while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two routes share a name, so reverse lookups would be ambiguous.
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    /// Two routes share a pattern, so the later one could never match.
    #[error("duplicate route pattern '{pattern}' (routes '{first}' and '{second}')")]
    DuplicatePattern {
        pattern: String,
        first: String,
        second: String,
    },
}

/// No route matched the requested path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path '{path}'")]
pub struct NotFound {
    pub path: String,
}

/// A single binding from a path pattern to a view, under a symbolic name.
#[derive(Clone)]
pub struct Route {
    name: String,
    matcher: Arc<dyn Matcher>,
    view: Arc<dyn View>,
}

impl Route {
    /// Create a route matching `pattern` literally.
    pub fn new(
        pattern: impl Into<String>,
        view: impl View + 'static,
        name: impl Into<String>,
    ) -> Self {
        Self::with_view(pattern, Arc::new(view), name)
    }

    /// Create a route from an already shared view.
    pub fn with_view(
        pattern: impl Into<String>,
        view: Arc<dyn View>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            matcher: Arc::new(ExactMatcher::new(pattern)),
            view,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    pub fn view(&self) -> &Arc<dyn View> {
        &self.view
    }

    /// Absolute URL path served by this route.
    pub fn url(&self) -> String {
        format!("/{}", self.pattern())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("pattern", &self.pattern())
            .field("view", &self.view)
            .finish()
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy)]
pub struct RouteMatch<'a> {
    route: &'a Route,
}

impl<'a> RouteMatch<'a> {
    pub fn name(&self) -> &'a str {
        self.route.name()
    }

    pub fn pattern(&self) -> &'a str {
        self.route.pattern()
    }

    pub fn view(&self) -> &'a Arc<dyn View> {
        self.route.view()
    }
}

/// Ordered, immutable collection of routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from routes in declaration order.
    ///
    /// Fails on the first duplicate name or pattern.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut names = HashSet::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            if !names.insert(route.name()) {
                return Err(RouteError::DuplicateName(route.name().to_string()));
            }
            if let Some(first) = routes[..i].iter().find(|r| r.pattern() == route.pattern()) {
                return Err(RouteError::DuplicatePattern {
                    pattern: route.pattern().to_string(),
                    first: first.name().to_string(),
                    second: route.name().to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// A new table with `route` appended after the existing ones.
    ///
    /// `self` is left untouched, so a rejected route costs nothing.
    pub fn with_route(&self, route: Route) -> Result<Self, RouteError> {
        let mut routes = self.routes.clone();
        routes.push(route);
        Self::new(routes)
    }

    /// Find the first route whose pattern matches `path`.
    ///
    /// `path` must already be normalized (no leading slash).
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, NotFound> {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map(|route| RouteMatch { route })
            .ok_or_else(|| NotFound {
                path: path.to_string(),
            })
    }

    /// URL path for the route called `name`.
    pub fn reverse(&self, name: &str) -> Option<String> {
        self.routes
            .iter()
            .find(|route| route.name() == name)
            .map(Route::url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
