//! Query handlers for the carousel context.
//!
//! A rendering adapter reads only `CarouselView`; it never inspects the
//! aggregate directly.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::accessibility::AccessibilityMap;
use crate::domain::carousel::{Lifecycle, NarrativeCarousel};
use crate::domain::mode::Mode;
use crate::domain::navigation::{NavigationEdges, TransitionTicket};

/// Read-only view of a carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    /// The carousel identifier.
    pub carousel_id: Uuid,
    /// Slot the carousel is mounted in.
    pub slot_id: String,
    /// Mount lifecycle state.
    pub lifecycle: Lifecycle,
    /// Display mode.
    pub mode: Mode,
    /// Width of one item in percent.
    pub item_width: Option<f64>,
    /// Width of the track in percent.
    pub total_width: Option<f64>,
    /// Active item, if any.
    pub active_index: Option<usize>,
    /// Track and header strip translation in percent.
    pub slide_offset: Option<f64>,
    /// Edge flags for the previous/next controls.
    pub edges: Option<NavigationEdges>,
    /// Per-item accessible state.
    pub accessibility: AccessibilityMap,
    /// Visited flags in index order.
    pub visited: Vec<bool>,
    /// Instruction text currently shown.
    pub instruction: String,
    /// Pending transition wait, if any.
    pub pending_transition: Option<TransitionTicket>,
    /// Whether animations are skipped.
    pub disable_animation: bool,
    /// Whether the detail popup is open.
    pub is_popup_open: bool,
    /// Whether the component is complete.
    pub is_complete: bool,
}

/// Builds the view model for `carousel`.
#[must_use]
pub fn carousel_view(carousel: &NarrativeCarousel) -> CarouselView {
    let layout = carousel.layout();
    CarouselView {
        carousel_id: carousel.id,
        slot_id: carousel.slot_id().to_owned(),
        lifecycle: carousel.lifecycle(),
        mode: carousel.mode(),
        item_width: layout.map(|metrics| metrics.item_width),
        total_width: layout.map(|metrics| metrics.total_width),
        active_index: carousel.active_index(),
        slide_offset: carousel.slide_offset(),
        edges: carousel.edges(),
        accessibility: carousel.accessibility().clone(),
        visited: carousel.items().map(|item| item.is_visited).collect(),
        instruction: carousel.instruction().to_owned(),
        pending_transition: carousel.pending_transition(),
        disable_animation: carousel.disable_animation(),
        is_popup_open: carousel.is_popup_open(),
        is_complete: carousel.is_complete(),
    }
}
