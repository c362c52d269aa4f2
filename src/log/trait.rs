//! The `Log` capability trait.

use std::error::Error;
use std::fmt::Arguments;
use std::panic::Location;

use crate::level::Level;

/// Logging capability bound to a single logger name.
///
/// Components hold a value implementing `Log` and emit through the
/// per-level methods. Each level has a predicate so callers can skip
/// building expensive messages:
///
/// ```
/// use logbridge::log::{self, Log};
///
/// let log = log::get_log("cache");
/// if log.is_debug_enabled() {
///     log.debug(format_args!("entries={}", 12_000));
/// }
/// ```
///
/// Emitting at a disabled level is a no-op, never an error.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
/// Individual emit calls are independent; any blocking or I/O behaviour
/// belongs to the backend.
pub trait Log: Send + Sync {
    /// Whether a message at `level` would actually be emitted.
    fn enabled(&self, level: Level) -> bool;

    /// Emit `message` at `level` on behalf of the call site `caller`, with an
    /// optional failure `cause`.
    ///
    /// This is the core method that implementations must provide. The
    /// convenience methods below delegate to it. The message arrives
    /// pre-formatted; implementations must hand it to the backend as a
    /// resolved value, never as a format template, so brace sequences inside
    /// the text survive untouched.
    fn log(
        &self,
        level: Level,
        message: Arguments<'_>,
        cause: Option<&(dyn Error + 'static)>,
        caller: &'static Location<'static>,
    );

    /// Whether fatal messages would be emitted.
    fn is_fatal_enabled(&self) -> bool {
        self.enabled(Level::Fatal)
    }

    /// Whether error messages would be emitted.
    fn is_error_enabled(&self) -> bool {
        self.enabled(Level::Error)
    }

    /// Whether warning messages would be emitted.
    fn is_warn_enabled(&self) -> bool {
        self.enabled(Level::Warn)
    }

    /// Whether info messages would be emitted.
    fn is_info_enabled(&self) -> bool {
        self.enabled(Level::Info)
    }

    /// Whether debug messages would be emitted.
    fn is_debug_enabled(&self) -> bool {
        self.enabled(Level::Debug)
    }

    /// Whether trace messages would be emitted.
    fn is_trace_enabled(&self) -> bool {
        self.enabled(Level::Trace)
    }

    /// Log a fatal-level message.
    #[track_caller]
    fn fatal(&self, message: Arguments<'_>) {
        self.log(Level::Fatal, message, None, Location::caller());
    }

    /// Log a fatal-level message with its cause.
    #[track_caller]
    fn fatal_cause(&self, message: Arguments<'_>, cause: &(dyn Error + 'static)) {
        self.log(Level::Fatal, message, Some(cause), Location::caller());
    }

    /// Log an error-level message.
    #[track_caller]
    fn error(&self, message: Arguments<'_>) {
        self.log(Level::Error, message, None, Location::caller());
    }

    /// Log an error-level message with its cause.
    #[track_caller]
    fn error_cause(&self, message: Arguments<'_>, cause: &(dyn Error + 'static)) {
        self.log(Level::Error, message, Some(cause), Location::caller());
    }

    /// Log a warning-level message.
    #[track_caller]
    fn warn(&self, message: Arguments<'_>) {
        self.log(Level::Warn, message, None, Location::caller());
    }

    /// Log a warning-level message with its cause.
    #[track_caller]
    fn warn_cause(&self, message: Arguments<'_>, cause: &(dyn Error + 'static)) {
        self.log(Level::Warn, message, Some(cause), Location::caller());
    }

    /// Log an info-level message.
    #[track_caller]
    fn info(&self, message: Arguments<'_>) {
        self.log(Level::Info, message, None, Location::caller());
    }

    /// Log an info-level message with its cause.
    #[track_caller]
    fn info_cause(&self, message: Arguments<'_>, cause: &(dyn Error + 'static)) {
        self.log(Level::Info, message, Some(cause), Location::caller());
    }

    /// Log a debug-level message.
    #[track_caller]
    fn debug(&self, message: Arguments<'_>) {
        self.log(Level::Debug, message, None, Location::caller());
    }

    /// Log a debug-level message with its cause.
    #[track_caller]
    fn debug_cause(&self, message: Arguments<'_>, cause: &(dyn Error + 'static)) {
        self.log(Level::Debug, message, Some(cause), Location::caller());
    }

    /// Log a trace-level message.
    #[track_caller]
    fn trace(&self, message: Arguments<'_>) {
        self.log(Level::Trace, message, None, Location::caller());
    }

    /// Log a trace-level message with its cause.
    #[track_caller]
    fn trace_cause(&self, message: Arguments<'_>, cause: &(dyn Error + 'static)) {
        self.log(Level::Trace, message, Some(cause), Location::caller());
    }
}

/// Convenience macros for logging with format strings.
///
/// Each macro checks the level predicate first, so the format arguments are
/// only evaluated when the message will actually be emitted. The `Log` trait
/// must be in scope at the call site.
#[macro_export]
macro_rules! log_fatal {
    ($log:expr, $($arg:tt)*) => {
        match &$log {
            log => {
                if log.is_fatal_enabled() {
                    log.fatal(format_args!($($arg)*));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($log:expr, $($arg:tt)*) => {
        match &$log {
            log => {
                if log.is_error_enabled() {
                    log.error(format_args!($($arg)*));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($log:expr, $($arg:tt)*) => {
        match &$log {
            log => {
                if log.is_warn_enabled() {
                    log.warn(format_args!($($arg)*));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)*) => {
        match &$log {
            log => {
                if log.is_info_enabled() {
                    log.info(format_args!($($arg)*));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)*) => {
        match &$log {
            log => {
                if log.is_debug_enabled() {
                    log.debug(format_args!($($arg)*));
                }
            }
        }
    };
}

#[macro_export]
macro_rules! log_trace {
    ($log:expr, $($arg:tt)*) => {
        match &$log {
            log => {
                if log.is_trace_enabled() {
                    log.trace(format_args!($($arg)*));
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Call {
        level: Level,
        message: String,
        cause: Option<String>,
        file: &'static str,
    }

    /// Records every call routed through the default methods.
    struct Recording {
        floor: Level,
        calls: Mutex<Vec<Call>>,
    }

    impl Recording {
        fn new(floor: Level) -> Self {
            Self {
                floor,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Log for Recording {
        fn enabled(&self, level: Level) -> bool {
            level >= self.floor
        }

        fn log(
            &self,
            level: Level,
            message: Arguments<'_>,
            cause: Option<&(dyn Error + 'static)>,
            caller: &'static Location<'static>,
        ) {
            self.calls.lock().unwrap().push(Call {
                level,
                message: message.to_string(),
                cause: cause.map(|c| c.to_string()),
                file: caller.file(),
            });
        }
    }

    #[test]
    fn test_emit_methods_route_their_level() {
        let log = Recording::new(Level::Trace);
        log.fatal(format_args!("f"));
        log.error(format_args!("e"));
        log.warn(format_args!("w"));
        log.info(format_args!("i"));
        log.debug(format_args!("d"));
        log.trace(format_args!("t"));

        let calls = log.calls.lock().unwrap();
        let levels: Vec<Level> = calls.iter().map(|c| c.level).collect();
        assert_eq!(
            levels,
            vec![
                Level::Fatal,
                Level::Error,
                Level::Warn,
                Level::Info,
                Level::Debug,
                Level::Trace
            ]
        );
        assert_eq!(calls[0].message, "f");
        assert!(calls.iter().all(|c| c.cause.is_none()));
    }

    #[test]
    fn test_cause_methods_attach_the_cause() {
        let log = Recording::new(Level::Trace);
        let err = std::io::Error::other("disk offline");
        log.error_cause(format_args!("write failed"), &err);

        let calls = log.calls.lock().unwrap();
        assert_eq!(calls[0].message, "write failed");
        assert_eq!(calls[0].cause.as_deref(), Some("disk offline"));
    }

    #[test]
    fn test_predicates_delegate_to_enabled() {
        let log = Recording::new(Level::Warn);
        assert!(log.is_fatal_enabled());
        assert!(log.is_error_enabled());
        assert!(log.is_warn_enabled());
        assert!(!log.is_info_enabled());
        assert!(!log.is_debug_enabled());
        assert!(!log.is_trace_enabled());
    }

    #[test]
    fn test_caller_is_the_call_site() {
        let log = Recording::new(Level::Trace);
        log.info(format_args!("here"));
        let calls = log.calls.lock().unwrap();
        assert!(calls[0].file.ends_with("trait.rs"));
    }

    #[test]
    fn test_braces_in_messages_survive() {
        let log = Recording::new(Level::Trace);
        log.info(format_args!("{}", "literal {} braces"));
        let calls = log.calls.lock().unwrap();
        assert_eq!(calls[0].message, "literal {} braces");
    }

    #[test]
    fn test_macros_skip_argument_evaluation_when_disabled() {
        let log = Recording::new(Level::Warn);
        let mut evaluated = false;
        log_debug!(log, "{}", {
            evaluated = true;
            "ignored"
        });
        assert!(!evaluated);
        assert!(log.calls.lock().unwrap().is_empty());

        log_error!(log, "{}", {
            evaluated = true;
            "kept"
        });
        assert!(evaluated);
        assert_eq!(log.calls.lock().unwrap()[0].message, "kept");
    }

    #[test]
    fn test_trait_is_object_safe() {
        let log: Box<dyn Log> = Box::new(Recording::new(Level::Trace));
        log.warn(format_args!("through the object"));
        assert!(log.is_warn_enabled());
    }
}
