//! Logging facade with one-time backend selection.
//!
//! This module provides a logging interface that decouples the host's code
//! from specific logging backends. Handles are bound to whichever backend is
//! live in the process when the first handle is requested.
//!
//! # Architecture
//!
//! - [`Log`] trait: the interface components use for logging
//! - [`TracingLog`]: adapter that emits `tracing` events with the true call
//!   site attached
//! - [`StdCallerLog`] / [`StdLog`]: adapters over the `log` facade, with and
//!   without call-site forwarding
//! - [`ConsoleLog`]: stderr fallback that is always available
//! - [`Capabilities`] / [`LogFactory`]: probe what is live and pick exactly
//!   one backend, in strict priority order
//! - [`LogHandle`]: the tagged union the factory hands out
//!
//! # Usage
//!
//! ```
//! use logbridge::log::{self, Log};
//!
//! let log = log::get_log("net::server");
//! log.info(format_args!("listening"));
//! if log.is_debug_enabled() {
//!     log.debug(format_args!("socket options applied"));
//! }
//! ```
//!
//! # Selection
//!
//! The backend is picked once per process and memoized: a live `tracing`
//! dispatcher wins over a live `log` logger, which wins over the console
//! fallback, except that a process running both a dispatcher and a `log`
//! logger is routed through the caller-aware `log` path, which keeps call
//! sites intact end to end. Absence of a backend is never an error; it is the
//! normal signal to try the next candidate.

mod console;
mod handle;
mod select;
#[cfg(feature = "log")]
mod stdlog_adapter;
#[cfg(feature = "tracing")]
mod tracing_adapter;
mod r#trait;

pub use console::ConsoleLog;
pub use handle::LogHandle;
pub use select::{Backend, Capabilities, LogFactory, select};
#[cfg(feature = "caller")]
pub use stdlog_adapter::StdCallerLog;
#[cfg(feature = "log")]
pub use stdlog_adapter::StdLog;
#[cfg(feature = "tracing")]
pub use tracing_adapter::TracingLog;
pub use r#trait::Log;

/// Create a log handle bound to `name` on the process-selected backend.
///
/// The first call performs backend selection; every later call reuses it.
pub fn get_log(name: &str) -> LogHandle {
    select::process_factory().get_log(name)
}
