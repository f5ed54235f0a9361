//! Time source for carousel event timestamps.
//!
//! Only `EventMetadata::occurred_at` reads the clock; navigation, layout and
//! completion never depend on wall time.

use chrono::{DateTime, Utc};

/// Supplies `occurred_at` for every event a carousel publishes.
pub trait Clock: Send + Sync {
    /// Timestamp for the event being emitted now.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock source used by hosts outside of tests.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
