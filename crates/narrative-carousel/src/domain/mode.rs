//! Display mode resolution.

use narrative_carousel_core::config::ViewportCategory;
use serde::{Deserialize, Serialize};

/// Display variant of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Inline multi-item layout.
    Large,
    /// Popup-driven single-item layout.
    Small,
}

impl Mode {
    /// Returns true for `Mode::Large`.
    #[must_use]
    pub fn is_large(self) -> bool {
        self == Self::Large
    }
}

/// Maps a viewport category to a display mode. Only `large` is `Mode::Large`.
#[must_use]
pub fn resolve_mode(category: ViewportCategory) -> Mode {
    match category {
        ViewportCategory::Large => Mode::Large,
        ViewportCategory::Small | ViewportCategory::Medium => Mode::Small,
    }
}
