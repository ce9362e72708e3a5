//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build routes → Start metrics → Bind listener → Construct server
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast → Server drains and exits
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{bootstrap, bootstrap_with_routes, Bootstrapped, StartupError};
