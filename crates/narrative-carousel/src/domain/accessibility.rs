//! Accessibility propagation.
//!
//! Computes, for every item, which affordances are enabled and which content
//! panel is exposed. The whole map is rebuilt and swapped in at once, so a
//! reader never sees two panels visible at the same time.

use serde::Serialize;

use super::mode::Mode;

/// Accessible state of one item's affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemAccessibility {
    /// The progress indicator shows this item as selected.
    pub progress_selected: bool,
    /// Controls nested in this item's progress graphic are interactive.
    pub progress_controls_enabled: bool,
    /// This item's compact navigation button is interactive.
    pub compact_nav_enabled: bool,
    /// The content panel is rendered.
    pub panel_visible: bool,
    /// The content panel is exposed to assistive technology.
    pub panel_accessible: bool,
}

impl ItemAccessibility {
    fn for_item(is_active: bool) -> Self {
        Self {
            progress_selected: is_active,
            progress_controls_enabled: is_active,
            compact_nav_enabled: is_active,
            panel_visible: is_active,
            panel_accessible: is_active,
        }
    }
}

/// Accessible state of every item, computed for one active index and mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AccessibilityMap {
    /// Mode the map was computed for.
    pub mode: Option<Mode>,
    /// Per-item state in index order.
    pub items: Vec<ItemAccessibility>,
}

impl AccessibilityMap {
    /// Index of the single visible panel, if any.
    #[must_use]
    pub fn visible_panel(&self) -> Option<usize> {
        self.items.iter().position(|item| item.panel_visible)
    }

    /// Number of visible panels.
    #[must_use]
    pub fn visible_panel_count(&self) -> usize {
        self.items.iter().filter(|item| item.panel_visible).count()
    }
}

/// Builds the accessibility map with `active_index` as the only enabled item.
#[must_use]
pub fn apply_accessibility(item_count: usize, active_index: usize, mode: Mode) -> AccessibilityMap {
    AccessibilityMap {
        mode: Some(mode),
        items: (0..item_count)
            .map(|index| ItemAccessibility::for_item(index == active_index))
            .collect(),
    }
}
