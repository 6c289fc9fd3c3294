//! Event sink adapters.

use crate::events::EscrowEvent;
use crate::ports::outbound::EventSink;
use std::sync::Mutex;
use tracing::info;

/// Logs every event as a structured tracing record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: EscrowEvent) {
        info!(event = ?event, "escrow event");
    }
}

/// Buffers events for later inspection. Test helper.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<EscrowEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order.
    pub fn events(&self) -> Vec<EscrowEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<EscrowEvent> {
        self.events.lock().map(|mut e| std::mem::take(&mut *e)).unwrap_or_default()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: EscrowEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
