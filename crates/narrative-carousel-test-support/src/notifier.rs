//! Test notifier: records every published event.

use std::sync::Mutex;

use narrative_carousel_core::event::{DomainEvent, EventMetadata};
use narrative_carousel_core::notifier::Notifier;

/// A published event, captured as metadata plus JSON payload.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Serialized payload.
    pub payload: serde_json::Value,
}

/// A notifier that records all published events.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingNotifier {
    /// Returns a snapshot of all published events, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Event type names in publication order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.metadata.event_type.clone())
            .collect()
    }

    /// Number of published events of `event_type`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn count(&self, event_type: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.metadata.event_type == event_type)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn publish(&self, event: &dyn DomainEvent) {
        self.events.lock().unwrap().push(RecordedEvent {
            metadata: event.metadata().clone(),
            payload: event.to_payload(),
        });
    }
}
