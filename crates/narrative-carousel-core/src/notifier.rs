//! Notification port for outward-facing events.

use crate::event::DomainEvent;

/// Host capability that receives every event a component emits.
pub trait Notifier: Send + Sync {
    /// Publishes an event to the host.
    fn publish(&self, event: &dyn DomainEvent);
}
