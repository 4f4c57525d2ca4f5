//! Captures `tracing` events emitted on the current thread, for asserting on diagnostics.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Debug)]
pub(crate) struct CapturedEvent {
    pub(crate) level: Level,
    pub(crate) name: Option<String>,
    pub(crate) message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCapture::default();
        event.record(&mut fields);

        self.events
            .lock()
            .expect("capture lock is never poisoned")
            .push(CapturedEvent {
                level: *event.metadata().level(),
                name: fields.name,
                message: fields.message.unwrap_or_default(),
            });
    }
}

#[derive(Default)]
struct FieldCapture {
    name: Option<String>,
    message: Option<String>,
}

impl FieldCapture {
    fn store(&mut self, field: &Field, value: String) {
        match field.name() {
            "name" => self.name = Some(value),
            "message" => self.message = Some(value),
            _ => {}
        }
    }
}

impl Visit for FieldCapture {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }
}

/// Runs `f` with a scoped subscriber and returns every event it emitted, in order.
pub(crate) fn capture_events(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);

    tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);

    let captured = events.lock().expect("capture lock is never poisoned");
    captured.clone()
}
