//! In-memory event capture for tests
//!
//! `init_test_capture` installs a global subscriber that records every event.
//! The buffer is shared by all tests in a binary, and tests run in parallel,
//! so assertions should be scoped to one request via [`TestCapture::for_request`].

use crate::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP, FIELD_REQUEST_ID};
use foresight_core_types::RequestId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event; every field value is kept in its rendered form
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    /// Whether this is the `event` boundary event of `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

#[derive(Default)]
struct Fields(BTreeMap<String, String>);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLayer {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);

        if let Ok(mut sink) = self.sink.lock() {
            sink.push(CapturedEvent {
                level: *event.metadata().level(),
                fields: fields.0,
            });
        }
    }
}

/// Read handle over the captured events
#[derive(Clone, Default)]
pub struct TestCapture {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// All events so far, in emission order
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.op() == Some(op))
    }

    /// Events tagged with `request_id`, in emission order
    pub fn for_request(&self, request_id: &RequestId) -> Vec<CapturedEvent> {
        self.filtered(|e| e.field(FIELD_REQUEST_ID) == Some(request_id.as_str()))
    }

    /// Number of `op`/`event` boundary events emitted for one request
    pub fn count(&self, request_id: &RequestId, op: &str, event: &str) -> usize {
        self.for_request(request_id)
            .iter()
            .filter(|e| e.is(op, event))
            .count()
    }

    /// # Panics
    ///
    /// Panics unless an `op`/`event` boundary event was captured.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        assert!(
            self.events().iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not captured",
            op,
            event
        );
    }

    fn filtered(&self, keep: impl Fn(&CapturedEvent) -> bool) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| keep(e)).collect()
    }

    fn layer(&self) -> CaptureLayer {
        CaptureLayer {
            sink: Arc::clone(&self.sink),
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber (first call only) and return its handle
///
/// ```
/// use foresight_core::log_op_start;
/// use foresight_core::logging_facility::init_test_capture;
/// use foresight_core_types::RequestContext;
///
/// let capture = init_test_capture();
/// let ctx = RequestContext::new();
/// log_op_start!("doc_example_op", ctx);
/// assert_eq!(capture.count(&ctx.request_id, "doc_example_op", "start"), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::default();
            if tracing_subscriber::registry()
                .with(capture.layer())
                .try_init()
                .is_err()
            {
                eprintln!("test capture: a global subscriber was already installed");
            }
            capture
        })
        .clone()
}
