//! Integration test for the tracing backend.
//!
//! A dispatcher installed before the first handle is requested must win the
//! selection, and every emitted event must carry the logger name and the true
//! call site in its forwarding fields.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use logbridge::log::{Backend, Capabilities, Log, LogFactory, get_log};
use tracing::field::{Field, Visit};
use tracing::span;
use tracing::{Event, Metadata, Subscriber};

// =============================================================================
// Capturing subscriber
// =============================================================================

#[derive(Debug, Clone, Default)]
struct CapturedEvent {
    level: String,
    target: String,
    fields: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldCollector<'a> {
    fields: &'a mut HashMap<String, String>,
}

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _id: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _id: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut captured = CapturedEvent {
            level: event.metadata().level().to_string(),
            target: event.metadata().target().to_string(),
            fields: HashMap::new(),
        };
        event.record(&mut FieldCollector {
            fields: &mut captured.fields,
        });
        self.events.lock().unwrap().push(captured);
    }

    fn enter(&self, _id: &span::Id) {}

    fn exit(&self, _id: &span::Id) {}
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn dispatcher_wins_selection_and_receives_events() {
    let capture = Capture::default();
    let events = capture.events.clone();
    tracing::subscriber::set_global_default(capture).expect("install subscriber");

    let caps = Capabilities::detect();
    assert!(caps.tracing_dispatcher);
    assert!(!caps.log_output);

    let factory = LogFactory::detect();
    assert_eq!(factory.backend(), Backend::Tracing);

    let log = get_log("engine::core");
    assert_eq!(log.backend(), Backend::Tracing);
    assert!(log.is_trace_enabled());
    assert!(log.is_fatal_enabled());

    let expected_line = line!(); log.warn(format_args!("pressure {}", 7));

    let cause = std::io::Error::other("disk offline");
    log.fatal_cause(format_args!("shutting down"), &cause);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);

    let warn = &events[0];
    assert_eq!(warn.level, "WARN");
    assert_eq!(warn.target, "logbridge");
    assert_eq!(warn.fields.get("message"), Some(&"pressure 7".to_string()));
    assert_eq!(
        warn.fields.get("log.target"),
        Some(&"engine::core".to_string())
    );
    assert!(
        warn.fields
            .get("log.file")
            .expect("log.file field")
            .ends_with("tracing_backend.rs")
    );
    assert_eq!(
        warn.fields.get("log.line"),
        Some(&expected_line.to_string())
    );

    // Fatal folds onto the most severe native level and carries the cause
    // as a structured field.
    let fatal = &events[1];
    assert_eq!(fatal.level, "ERROR");
    assert_eq!(
        fatal.fields.get("message"),
        Some(&"shutting down".to_string())
    );
    assert_eq!(fatal.fields.get("error"), Some(&"disk offline".to_string()));
}
