//! Fire-and-forget event reporting.
//!
//! Page renderers attach a serialized [`Event::PageView`] to every page and
//! the page script beacons it to the configured endpoint. Form submissions
//! record their own events into an [`AnalyticsSink`] once the gateway
//! accepts them. Recording never fails from the caller's point of view: a
//! sink that cannot write drops the event.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    PageView { path: String, title: String },
    ContactForm { subject: String },
    Donation { amount: f64 },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::PageView { .. } => "page_view",
            Event::ContactForm { .. } => "contact_form",
            Event::Donation { .. } => "donation",
        }
    }

    /// JSON form used for `data-analytics` attributes and JSON-lines files.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: &Event);
}

/// Discards everything.
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _event: &Event) {}
}

/// Prints each event to stdout as `analytics: {json}`.
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn record(&self, event: &Event) {
        println!("analytics: {}", event.to_json());
    }
}

/// Keeps events in memory, in order.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: &Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Appends one JSON object per line to a file.
pub struct JsonLinesSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl AnalyticsSink for JsonLinesSink {
    fn record(&self, event: &Event) {
        let Ok(_guard) = self.lock.lock() else {
            return;
        };
        // Fire-and-forget: a failed write drops the event.
        let _ = self.append(&event.to_json());
    }
}
