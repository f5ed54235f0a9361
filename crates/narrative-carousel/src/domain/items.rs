//! Ordered store of narrative items.

use narrative_carousel_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::config::ItemConfig;

/// One sequential content unit of the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeItem {
    /// Position in the collection, 0-based and contiguous.
    pub index: usize,
    /// Whether this item is the one on stage.
    pub is_active: bool,
    /// Whether this item has been seen.
    pub is_visited: bool,
    /// Item title.
    pub title: String,
    /// Item body copy.
    pub body: String,
    /// Alternate body copy for small mode.
    pub mobile_body: Option<String>,
}

impl NarrativeItem {
    /// Body copy to show in small mode.
    #[must_use]
    pub fn small_mode_body(&self) -> &str {
        self.mobile_body.as_deref().unwrap_or(&self.body)
    }
}

/// Ordered collection of narrative items.
///
/// At most one item is active at any time. Indices always equal positions.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<NarrativeItem>,
}

impl ItemStore {
    /// Builds the store from configured items, assigning contiguous indices.
    ///
    /// If the configuration marks more than one item active, only the first
    /// one keeps the flag.
    #[must_use]
    pub fn from_config(configs: &[ItemConfig]) -> Self {
        let mut seen_active = false;
        let items = configs
            .iter()
            .enumerate()
            .map(|(index, config)| {
                let is_active = config.is_active && !seen_active;
                seen_active |= is_active;
                NarrativeItem {
                    index,
                    is_active,
                    is_visited: config.is_visited,
                    title: config.title.clone(),
                    body: config.body.clone(),
                    mobile_body: config.mobile_body.clone(),
                }
            })
            .collect();
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all items in order.
    pub fn iter(&self) -> impl Iterator<Item = &NarrativeItem> {
        self.items.iter()
    }

    /// Index of the active item, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_active)
    }

    /// The active item, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&NarrativeItem> {
        self.items.iter().find(|item| item.is_active)
    }

    /// Makes `index` the only active item.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DegenerateCollection` for an empty store and
    /// `DomainError::OutOfRange` if `index` is not in the collection; the store
    /// is left untouched in both cases.
    pub fn set_active(&mut self, index: usize) -> Result<(), DomainError> {
        if self.items.is_empty() {
            return Err(DomainError::DegenerateCollection);
        }
        if index >= self.items.len() {
            return Err(DomainError::OutOfRange {
                index,
                item_count: self.items.len(),
            });
        }
        for item in &mut self.items {
            item.is_active = item.index == index;
        }
        Ok(())
    }

    /// Marks `index` visited. Returns true if the flag flipped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `index` is not in the collection.
    pub fn mark_visited(&mut self, index: usize) -> Result<bool, DomainError> {
        let item_count = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(DomainError::OutOfRange { index, item_count })?;
        let flipped = !item.is_visited;
        item.is_visited = true;
        Ok(flipped)
    }

    /// Clears every item's active flag.
    pub fn reset_active(&mut self) {
        for item in &mut self.items {
            item.is_active = false;
        }
    }

    /// Clears every item's active and visited flags.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.is_active = false;
            item.is_visited = false;
        }
    }

    /// Visited flags in index order.
    #[must_use]
    pub fn visited(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.is_visited).collect()
    }

    /// Returns true if every item has been visited.
    #[must_use]
    pub fn all_visited(&self) -> bool {
        self.items.iter().all(|item| item.is_visited)
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
