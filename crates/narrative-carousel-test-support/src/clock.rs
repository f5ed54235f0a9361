//! Pinned event timestamps for carousel tests.

use chrono::{DateTime, Utc};
use narrative_carousel_core::clock::Clock;

/// Stamps every published event with the same instant, so recorded
/// `EventMetadata::occurred_at` values can be compared exactly.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
