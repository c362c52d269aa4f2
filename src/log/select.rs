//! Backend capability probes and one-time selection.

use std::sync::OnceLock;

use crate::log::LogHandle;
use crate::log::console::ConsoleLog;
#[cfg(feature = "caller")]
use crate::log::stdlog_adapter::StdCallerLog;
#[cfg(feature = "log")]
use crate::log::stdlog_adapter::StdLog;
#[cfg(feature = "tracing")]
use crate::log::tracing_adapter::TracingLog;

/// Backend families the facade can bind handles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// An installed `tracing` dispatcher.
    #[cfg(feature = "tracing")]
    Tracing,
    /// An installed `log` logger, with call-site forwarding.
    #[cfg(feature = "caller")]
    StdCaller,
    /// An installed `log` logger, without call-site forwarding.
    #[cfg(feature = "log")]
    Std,
    /// The built-in stderr writer.
    Console,
}

/// Snapshot of the logging capabilities live in this process.
///
/// Selection is a pure function of this value, so embedders and tests can
/// pin a backend by constructing the snapshot themselves instead of probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// A real `tracing` dispatcher has been installed.
    pub tracing_dispatcher: bool,
    /// A `log` logger has been installed and enabled.
    pub log_output: bool,
    /// Call-site forwarding onto the `log` facade is compiled in.
    pub caller_tracking: bool,
}

impl Capabilities {
    /// Probe the current process.
    ///
    /// A missing backend is the normal signal to fall through to the next
    /// candidate, never an error. The probes read process state only; they do
    /// not retry and have no side effects.
    pub fn detect() -> Self {
        Self {
            tracing_dispatcher: tracing_dispatcher_installed(),
            log_output: log_output_installed(),
            caller_tracking: cfg!(feature = "caller"),
        }
    }
}

#[cfg(feature = "tracing")]
fn tracing_dispatcher_installed() -> bool {
    tracing::dispatcher::get_default(|dispatch| {
        !dispatch.is::<tracing::subscriber::NoSubscriber>()
    })
}

#[cfg(not(feature = "tracing"))]
fn tracing_dispatcher_installed() -> bool {
    false
}

#[cfg(feature = "log")]
fn log_output_installed() -> bool {
    log::max_level() != log::LevelFilter::Off
}

#[cfg(not(feature = "log"))]
fn log_output_installed() -> bool {
    false
}

/// Pick a backend for the given capabilities, in strict priority order.
pub fn select(caps: Capabilities) -> Backend {
    #[cfg(feature = "tracing")]
    if caps.tracing_dispatcher {
        // When events land on the `log` facade anyway, the caller-aware
        // route is the one that keeps call sites intact end to end.
        #[cfg(feature = "caller")]
        if caps.log_output && caps.caller_tracking {
            return Backend::StdCaller;
        }
        return Backend::Tracing;
    }
    #[cfg(feature = "caller")]
    if caps.log_output && caps.caller_tracking {
        return Backend::StdCaller;
    }
    #[cfg(feature = "log")]
    if caps.log_output {
        return Backend::Std;
    }
    Backend::Console
}

/// Creates log handles bound to the backend selected at construction time.
#[derive(Debug, Clone, Copy)]
pub struct LogFactory {
    backend: Backend,
}

impl LogFactory {
    /// Select a backend from the capabilities live in this process.
    pub fn detect() -> Self {
        Self::with_capabilities(Capabilities::detect())
    }

    /// Select a backend from an explicit capability set.
    pub fn with_capabilities(caps: Capabilities) -> Self {
        Self {
            backend: select(caps),
        }
    }

    /// The backend every handle from this factory is bound to.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Create a handle bound to `name` on the selected backend.
    pub fn get_log(&self, name: &str) -> LogHandle {
        match self.backend {
            #[cfg(feature = "tracing")]
            Backend::Tracing => LogHandle::Tracing(TracingLog::new(name)),
            #[cfg(feature = "caller")]
            Backend::StdCaller => LogHandle::StdCaller(StdCallerLog::new(name)),
            #[cfg(feature = "log")]
            Backend::Std => LogHandle::Std(StdLog::new(name)),
            // Constructed only when actually selected.
            Backend::Console => LogHandle::Console(ConsoleLog::new(name)),
        }
    }
}

/// Process-wide factory, selected once on first use and never recomputed.
static FACTORY: OnceLock<LogFactory> = OnceLock::new();

pub(crate) fn process_factory() -> &'static LogFactory {
    FACTORY.get_or_init(LogFactory::detect)
}
