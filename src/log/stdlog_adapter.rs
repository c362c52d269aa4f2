//! Adapters for an installed `log` logger.
//!
//! Two variants share the plumbing here: [`StdCallerLog`] stamps each record
//! with the true call site, [`StdLog`] cannot see past this adapter and
//! stamps records with the adapter's own location instead.

use std::error::Error;
use std::fmt::Arguments;
use std::panic::Location;

use crate::level::Level;
use crate::log::Log;

fn fold(level: Level) -> log::Level {
    match level {
        // No dedicated fatal level; fold onto the most severe one.
        Level::Fatal | Level::Error => log::Level::Error,
        Level::Warn => log::Level::Warn,
        Level::Info => log::Level::Info,
        Level::Debug => log::Level::Debug,
        Level::Trace => log::Level::Trace,
    }
}

fn backend_enabled(name: &str, level: log::Level) -> bool {
    level <= log::max_level()
        && log::logger().enabled(&log::Metadata::builder().level(level).target(name).build())
}

/// Caller-aware log implementation over the `log` facade.
///
/// Records carry the file and line of the original log statement, so backends
/// that render locations show the real call site rather than this adapter.
/// The cause, when present, is folded into the message text; the `log` record
/// format has no slot for a structured failure value.
#[cfg(feature = "caller")]
#[derive(Debug, Clone)]
pub struct StdCallerLog {
    name: String,
}

#[cfg(feature = "caller")]
impl StdCallerLog {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The logger name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(feature = "caller")]
impl Log for StdCallerLog {
    fn enabled(&self, level: Level) -> bool {
        backend_enabled(&self.name, fold(level))
    }

    fn log(
        &self,
        level: Level,
        message: Arguments<'_>,
        cause: Option<&(dyn Error + 'static)>,
        caller: &'static Location<'static>,
    ) {
        let level = fold(level);
        if !backend_enabled(&self.name, level) {
            return;
        }
        match cause {
            Some(cause) => log::logger().log(
                &log::Record::builder()
                    .args(format_args!("{message}: {cause}"))
                    .level(level)
                    .target(&self.name)
                    .file_static(Some(caller.file()))
                    .line(Some(caller.line()))
                    .build(),
            ),
            None => log::logger().log(
                &log::Record::builder()
                    .args(message)
                    .level(level)
                    .target(&self.name)
                    .file_static(Some(caller.file()))
                    .line(Some(caller.line()))
                    .build(),
            ),
        }
    }
}

/// Plain log implementation over the `log` facade.
///
/// The backend cannot locate the original log statement through this path, so
/// records always report the adapter itself as the call site.
#[derive(Debug, Clone)]
pub struct StdLog {
    name: String,
}

impl StdLog {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The logger name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Log for StdLog {
    fn enabled(&self, level: Level) -> bool {
        backend_enabled(&self.name, fold(level))
    }

    fn log(
        &self,
        level: Level,
        message: Arguments<'_>,
        cause: Option<&(dyn Error + 'static)>,
        _caller: &'static Location<'static>,
    ) {
        let level = fold(level);
        if !backend_enabled(&self.name, level) {
            return;
        }
        match cause {
            Some(cause) => log::logger().log(
                &log::Record::builder()
                    .args(format_args!("{message}: {cause}"))
                    .level(level)
                    .target(&self.name)
                    .module_path_static(Some(module_path!()))
                    .file_static(Some(file!()))
                    .line(Some(line!()))
                    .build(),
            ),
            None => log::logger().log(
                &log::Record::builder()
                    .args(message)
                    .level(level)
                    .target(&self.name)
                    .module_path_static(Some(module_path!()))
                    .file_static(Some(file!()))
                    .line(Some(line!()))
                    .build(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapters_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StdLog>();
        #[cfg(feature = "caller")]
        assert_send_sync::<StdCallerLog>();
    }

    #[test]
    fn test_fatal_folds_onto_error() {
        assert_eq!(fold(Level::Fatal), log::Level::Error);
        assert_eq!(fold(Level::Error), log::Level::Error);
        assert_eq!(fold(Level::Warn), log::Level::Warn);
        assert_eq!(fold(Level::Trace), log::Level::Trace);
    }

    #[test]
    fn test_disabled_without_an_installed_logger() {
        // The unit-test process never installs a `log` logger, so the max
        // level stays Off and every level reads as disabled.
        let log = StdLog::new("quiet");
        assert!(!log.is_fatal_enabled());
        assert!(!log.is_trace_enabled());
        // Emitting while disabled must be a no-op, not a panic.
        log.error(format_args!("dropped"));
    }

    #[test]
    fn test_name_is_bound_once() {
        let log = StdLog::new("svc::db");
        assert_eq!(log.name(), "svc::db");
        #[cfg(feature = "caller")]
        assert_eq!(StdCallerLog::new("svc::db").name(), "svc::db");
    }
}
