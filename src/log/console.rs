//! Console fallback backend.

use std::error::Error;
use std::fmt::Arguments;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::level::Level;
use crate::log::Log;

/// Log implementation that writes directly to stderr.
///
/// Selected only when no richer backend is live in the process, and
/// constructed only at that point. Each line carries a UTC timestamp, the
/// level, the logger name, the call site and the message, followed by the
/// cause chain when one is attached. Write failures are discarded; a logger
/// must not take the host down.
#[derive(Debug, Clone)]
pub struct ConsoleLog {
    name: String,
    threshold: Level,
}

impl ConsoleLog {
    pub(crate) fn new(name: &str) -> Self {
        Self::with_threshold(name, Level::Info)
    }

    /// A console log that drops everything below `threshold`.
    pub fn with_threshold(name: &str, threshold: Level) -> Self {
        Self {
            name: name.to_string(),
            threshold,
        }
    }

    /// The logger name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lowest level this handle emits.
    pub fn threshold(&self) -> Level {
        self.threshold
    }
}

/// Render one log line: timestamp, level, name, call site, message and the
/// cause chain, one `caused by:` hop per source link.
fn render(
    timestamp: DateTime<Utc>,
    level: Level,
    name: &str,
    message: Arguments<'_>,
    cause: Option<&(dyn Error + 'static)>,
    caller: &'static Location<'static>,
) -> String {
    let mut line = format!(
        "{} {:5} {} [{}:{}] {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        name,
        caller.file(),
        caller.line(),
        message,
    );
    if let Some(cause) = cause {
        let _ = write!(line, ": {cause}");
        let mut source = cause.source();
        while let Some(err) = source {
            let _ = write!(line, ": caused by: {err}");
            source = err.source();
        }
    }
    line
}

impl Log for ConsoleLog {
    fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
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
        let line = render(Utc::now(), level, &self.name, message, cause, caller);
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }
}
