//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → http layer strips the leading '/'
//!     → router.rs (route lookup, declaration order)
//!     → matcher.rs (evaluate pattern)
//!     → Return: matched Route or NotFound
//!
//! Route Construction (at startup):
//!     urls.rs declares (pattern, view, name) triples
//!     → duplicate names/patterns rejected
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Literal patterns only
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;
pub mod urls;

pub use router::{NotFound, Route, RouteError, RouteMatch, RouteTable};
pub use urls::url_patterns;
