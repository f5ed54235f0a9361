//! Domain events for the carousel context.

use narrative_carousel_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mode::Mode;

/// Emitted when a different item becomes active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemActivated {
    /// The carousel instance.
    pub carousel_id: Uuid,
    /// Previously active index, if any.
    pub previous_index: Option<usize>,
    /// Newly active index.
    pub index: usize,
}

/// Emitted when an item is seen for the first time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVisited {
    /// The carousel instance.
    pub carousel_id: Uuid,
    /// The visited item.
    pub index: usize,
}

/// Emitted when a viewport change resolves to a different mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeChanged {
    /// The carousel instance.
    pub carousel_id: Uuid,
    /// Mode before the change.
    pub from: Mode,
    /// Mode after the change.
    pub to: Mode,
}

/// Emitted the first time every item has been visited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllItemsCompleted {
    /// The carousel instance.
    pub carousel_id: Uuid,
    /// Number of items visited.
    pub item_count: usize,
}

/// Emitted when the component as a whole is marked complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentCompleted {
    /// The carousel instance.
    pub carousel_id: Uuid,
}

/// Emitted once after the carousel handed its slot to another family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayoutRequested {
    /// The carousel instance that was torn down.
    pub carousel_id: Uuid,
    /// Slot the replacement was inserted into.
    pub slot_id: String,
    /// Family of the replacement.
    pub family: String,
}

/// Event payload variants for the carousel context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarouselEventKind {
    /// A different item became active.
    ItemActivated(ItemActivated),
    /// An item was visited for the first time.
    ItemVisited(ItemVisited),
    /// The display mode changed.
    ModeChanged(ModeChanged),
    /// Every item has been visited.
    AllItemsCompleted(AllItemsCompleted),
    /// The component was marked complete.
    ComponentCompleted(ComponentCompleted),
    /// The host should lay the page out again.
    RelayoutRequested(RelayoutRequested),
}

impl CarouselEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ItemActivated(_) => "carousel.item_activated",
            Self::ItemVisited(_) => "carousel.item_visited",
            Self::ModeChanged(_) => "carousel.mode_changed",
            Self::AllItemsCompleted(_) => "carousel.all_items_completed",
            Self::ComponentCompleted(_) => "carousel.component_completed",
            Self::RelayoutRequested(_) => "carousel.relayout_requested",
        }
    }
}

/// Domain event envelope for the carousel context.
#[derive(Debug, Clone)]
pub struct CarouselEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CarouselEventKind,
}

impl DomainEvent for CarouselEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).unwrap_or(serde_json::Value::Null)
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
