//! Test focus manager: records every focus request.

use std::sync::Mutex;

use narrative_carousel_core::focus::{FocusManager, FocusOptions, FocusTarget};

/// A focus manager that records requests instead of moving focus.
#[derive(Debug, Default)]
pub struct RecordingFocusManager {
    requests: Mutex<Vec<(FocusTarget, FocusOptions)>>,
}

impl RecordingFocusManager {
    /// Returns a snapshot of all focus requests, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<(FocusTarget, FocusOptions)> {
        self.requests.lock().unwrap().clone()
    }
}

impl FocusManager for RecordingFocusManager {
    fn focus_first(&self, target: FocusTarget, options: FocusOptions) {
        self.requests.lock().unwrap().push((target, options));
    }
}
