//! Process-selected log handles.

use std::error::Error;
use std::fmt;
use std::fmt::Arguments;
use std::panic::Location;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::log::Log;
use crate::log::console::ConsoleLog;
use crate::log::select::Backend;
#[cfg(feature = "caller")]
use crate::log::stdlog_adapter::StdCallerLog;
#[cfg(feature = "log")]
use crate::log::stdlog_adapter::StdLog;
#[cfg(feature = "tracing")]
use crate::log::tracing_adapter::TracingLog;

/// A log handle bound to one logger name and the process-selected backend.
///
/// Handles are cheap to clone and safe to share across threads. Only the
/// logger name is persistent state: serializing a handle writes the name
/// alone, and deserializing re-resolves a fresh backend binding through the
/// same selection path used at first construction.
#[derive(Debug, Clone)]
pub enum LogHandle {
    /// Bound to an installed `tracing` dispatcher.
    #[cfg(feature = "tracing")]
    Tracing(TracingLog),
    /// Bound to an installed `log` logger, forwarding call sites.
    #[cfg(feature = "caller")]
    StdCaller(StdCallerLog),
    /// Bound to an installed `log` logger.
    #[cfg(feature = "log")]
    Std(StdLog),
    /// Bound to the stderr fallback.
    Console(ConsoleLog),
}

impl LogHandle {
    /// The logger name this handle is bound to.
    pub fn name(&self) -> &str {
        match self {
            #[cfg(feature = "tracing")]
            LogHandle::Tracing(log) => log.name(),
            #[cfg(feature = "caller")]
            LogHandle::StdCaller(log) => log.name(),
            #[cfg(feature = "log")]
            LogHandle::Std(log) => log.name(),
            LogHandle::Console(log) => log.name(),
        }
    }

    /// The backend family this handle is bound to.
    pub fn backend(&self) -> Backend {
        match self {
            #[cfg(feature = "tracing")]
            LogHandle::Tracing(_) => Backend::Tracing,
            #[cfg(feature = "caller")]
            LogHandle::StdCaller(_) => Backend::StdCaller,
            #[cfg(feature = "log")]
            LogHandle::Std(_) => Backend::Std,
            LogHandle::Console(_) => Backend::Console,
        }
    }
}

impl Log for LogHandle {
    fn enabled(&self, level: Level) -> bool {
        match self {
            #[cfg(feature = "tracing")]
            LogHandle::Tracing(log) => log.enabled(level),
            #[cfg(feature = "caller")]
            LogHandle::StdCaller(log) => log.enabled(level),
            #[cfg(feature = "log")]
            LogHandle::Std(log) => log.enabled(level),
            LogHandle::Console(log) => log.enabled(level),
        }
    }

    fn log(
        &self,
        level: Level,
        message: Arguments<'_>,
        cause: Option<&(dyn Error + 'static)>,
        caller: &'static Location<'static>,
    ) {
        match self {
            #[cfg(feature = "tracing")]
            LogHandle::Tracing(log) => log.log(level, message, cause, caller),
            #[cfg(feature = "caller")]
            LogHandle::StdCaller(log) => log.log(level, message, cause, caller),
            #[cfg(feature = "log")]
            LogHandle::Std(log) => log.log(level, message, cause, caller),
            LogHandle::Console(log) => log.log(level, message, cause, caller),
        }
    }
}

impl Serialize for LogHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // The backend binding is process state, not payload.
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for LogHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl Visitor<'_> for NameVisitor {
            type Value = LogHandle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a logger name")
            }

            fn visit_str<E: de::Error>(self, name: &str) -> Result<LogHandle, E> {
                Ok(crate::log::get_log(name))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
