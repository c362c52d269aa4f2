//! Logbridge - a self-selecting logging facade.
//!
//! This library decouples a host framework's logging calls from any specific
//! logging backend. Components log through a single [`log::Log`] capability,
//! and the facade binds every handle to whichever backend is actually live in
//! the process when the first handle is requested.
//!
//! # Architecture
//!
//! - [`log::Log`] trait: the interface components use for logging
//! - [`log::TracingLog`]: adapter for an installed `tracing` dispatcher
//! - [`log::StdCallerLog`] / [`log::StdLog`]: adapters for an installed
//!   `log` logger, with and without call-site forwarding
//! - [`log::ConsoleLog`]: guaranteed-present stderr fallback
//! - [`log::LogFactory`]: one-time backend selection, memoized per process
//! - [`id`]: fast random 128-bit identifiers
//!
//! # Usage
//!
//! ```
//! use logbridge::log::{self, Log};
//!
//! let log = log::get_log("app::startup");
//! if log.is_info_enabled() {
//!     log.info(format_args!("starting up"));
//! }
//! logbridge::log_debug!(log, "config loaded in {}ms", 12);
//! ```
//!
//! Backend selection runs exactly once per process, the first time a handle
//! is requested, and is never recomputed. Handles constructed afterwards all
//! share that selection. To pin the selection explicitly (for tests or
//! embedders that know their stack), build a [`log::LogFactory`] from a
//! [`log::Capabilities`] value instead of going through [`log::get_log`].
//!
//! # Identifiers
//!
//! ```
//! use logbridge::id::{IdGenerator, RandomIdGenerator};
//!
//! let mut ids = RandomIdGenerator::new();
//! let request_id = ids.generate_id();
//! assert_ne!(request_id, ids.generate_id());
//! ```

pub mod id;
pub mod level;
pub mod log;

/// Version of the logbridge library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }

    #[test]
    fn test_log_module_exists() {
        // Verify a handle can be constructed through the public entry point
        let handle = crate::log::get_log("smoke");
        assert_eq!(handle.name(), "smoke");
    }

    #[test]
    fn test_id_module_exists() {
        use crate::id::{IdGenerator, RandomIdGenerator};
        let mut ids = RandomIdGenerator::new();
        let _ = ids.generate_id();
    }
}
