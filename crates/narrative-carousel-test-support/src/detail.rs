//! Test detail presenter: records opened popups.

use std::sync::Mutex;

use narrative_carousel_core::detail::{DetailContent, DetailPresenter};

/// A detail presenter that records what it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingDetailPresenter {
    opened: Mutex<Vec<DetailContent>>,
}

impl RecordingDetailPresenter {
    /// Returns a snapshot of all opened popups, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn opened(&self) -> Vec<DetailContent> {
        self.opened.lock().unwrap().clone()
    }
}

impl DetailPresenter for RecordingDetailPresenter {
    fn open_detail(&self, content: DetailContent) {
        self.opened.lock().unwrap().push(content);
    }
}
