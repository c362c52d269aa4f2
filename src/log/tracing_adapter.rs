//! Adapter for an installed `tracing` dispatcher.

use std::error::Error;
use std::fmt::Arguments;
use std::panic::Location;

use crate::level::Level;
use crate::log::Log;

/// Static target stamped on every event this adapter emits. The logger name
/// and the true call site travel in the `log.target`, `log.file` and
/// `log.line` fields, the convention subscribers use to restore forwarded
/// records.
const EVENT_TARGET: &str = "logbridge";

/// Log implementation that emits `tracing` events.
///
/// `tracing` has five levels, so fatal messages fold onto `ERROR`. The cause,
/// when present, is forwarded as a structured `error` field rather than
/// flattened into the message text; this is the one backend that can carry
/// the value through intact.
#[derive(Debug, Clone)]
pub struct TracingLog {
    name: String,
}

impl TracingLog {
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

macro_rules! emit {
    ($name:expr, $lvl:expr, $message:expr, $cause:expr, $caller:expr) => {
        match $cause {
            Some(cause) => tracing::event!(
                target: EVENT_TARGET,
                $lvl,
                log.target = $name,
                log.file = $caller.file(),
                log.line = $caller.line(),
                error = cause,
                "{}",
                $message
            ),
            None => tracing::event!(
                target: EVENT_TARGET,
                $lvl,
                log.target = $name,
                log.file = $caller.file(),
                log.line = $caller.line(),
                "{}",
                $message
            ),
        }
    };
}

impl Log for TracingLog {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Fatal | Level::Error => {
                tracing::event_enabled!(target: EVENT_TARGET, tracing::Level::ERROR)
            }
            Level::Warn => tracing::event_enabled!(target: EVENT_TARGET, tracing::Level::WARN),
            Level::Info => tracing::event_enabled!(target: EVENT_TARGET, tracing::Level::INFO),
            Level::Debug => tracing::event_enabled!(target: EVENT_TARGET, tracing::Level::DEBUG),
            Level::Trace => tracing::event_enabled!(target: EVENT_TARGET, tracing::Level::TRACE),
        }
    }

    fn log(
        &self,
        level: Level,
        message: Arguments<'_>,
        cause: Option<&(dyn Error + 'static)>,
        caller: &'static Location<'static>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let name = self.name.as_str();
        match level {
            Level::Fatal | Level::Error => {
                emit!(name, tracing::Level::ERROR, message, cause, caller)
            }
            Level::Warn => emit!(name, tracing::Level::WARN, message, cause, caller),
            Level::Info => emit!(name, tracing::Level::INFO, message, cause, caller),
            Level::Debug => emit!(name, tracing::Level::DEBUG, message, cause, caller),
            Level::Trace => emit!(name, tracing::Level::TRACE, message, cause, caller),
        }
    }
}
