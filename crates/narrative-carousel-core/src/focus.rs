//! Focus management port.

use serde::Serialize;

/// Element a focus request is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FocusTarget {
    /// The content panel of the item at `index`.
    ContentPanel {
        /// Item index.
        index: usize,
    },
    /// The compact (small-mode) navigation control.
    CompactNavigation,
}

/// Options for a focus request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FocusOptions {
    /// Apply focus after the current render pass instead of immediately.
    pub defer: bool,
}

/// Host capability that moves accessible focus.
pub trait FocusManager: Send + Sync {
    /// Focuses the first focusable element inside `target`.
    fn focus_first(&self, target: FocusTarget, options: FocusOptions);
}
