//! Active-item navigation and slide transition sequencing.
//!
//! Every stage change runs the same pipeline: visited flag (large mode, real
//! changes only), accessibility map, edge flags, completion, slide position.
//! A slide move either resolves immediately or leaves exactly one pending
//! `TransitionTicket`; issuing a new ticket invalidates the previous one.

use narrative_carousel_core::config::TextDirection;
use narrative_carousel_core::focus::{FocusOptions, FocusTarget};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::accessibility::apply_accessibility;
use super::carousel::{Lifecycle, NarrativeCarousel};
use super::events::{CarouselEventKind, ItemActivated};

/// Direction of a previous/next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards index 0.
    Previous,
    /// Towards the last index.
    Next,
}

/// Whether the active item sits at either end of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEdges {
    /// Active item is the first one; the previous control is hidden.
    pub is_at_start: bool,
    /// Active item is the last one; the next control is hidden.
    pub is_at_end: bool,
}

/// Handle for one pending "transition complete" wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTicket(pub u64);

/// Percentage translation that brings item `index` on stage.
///
/// Left-to-right layouts translate negatively; right-to-left layouts
/// translate positively.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_slide_offset(item_width: f64, index: usize, direction: TextDirection) -> f64 {
    let offset = item_width * index as f64;
    match direction {
        TextDirection::LeftToRight => -offset,
        TextDirection::RightToLeft => offset,
    }
}

/// Edge flags for `active_index` in a collection of `item_count`.
#[must_use]
pub fn navigation_edges(active_index: usize, item_count: usize) -> NavigationEdges {
    NavigationEdges {
        is_at_start: active_index == 0,
        is_at_end: active_index + 1 == item_count,
    }
}

impl NarrativeCarousel {
    /// Makes `index` the active item and re-runs the stage pipeline.
    ///
    /// Out-of-range indices are rejected and leave every state untouched.
    /// Re-activating the current item re-applies the stage without marking it
    /// visited again. Returns true if the request was applied.
    pub fn activate_item(&mut self, index: usize, correlation_id: Uuid) -> bool {
        if self.lifecycle == Lifecycle::TornDown {
            warn!(carousel_id = %self.id, index, "activation requested after teardown");
            return false;
        }

        let previous = self.items.active_index();
        if let Err(err) = self.items.set_active(index) {
            debug!(carousel_id = %self.id, %err, "activation rejected");
            return false;
        }

        let is_state_change = previous != Some(index);
        if is_state_change {
            self.emit(
                CarouselEventKind::ItemActivated(ItemActivated {
                    carousel_id: self.id,
                    previous_index: previous,
                    index,
                }),
                correlation_id,
            );
        }
        self.set_stage(index, is_state_change, correlation_id);
        true
    }

    /// Activates the neighbour of the active item in `direction`.
    ///
    /// No clamping: stepping past either end is rejected like any other
    /// out-of-range activation.
    pub fn shift_active(&mut self, direction: Direction, correlation_id: Uuid) -> bool {
        let Some(current) = self.items.active_index() else {
            debug!(carousel_id = %self.id, "shift requested with no active item");
            return false;
        };
        let target = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => current.checked_add(1),
        };
        match target {
            Some(index) => self.activate_item(index, correlation_id),
            None => {
                debug!(carousel_id = %self.id, ?direction, "shift rejected at boundary");
                false
            }
        }
    }

    /// Edge flags for the active item, if any.
    #[must_use]
    pub fn evaluate_navigation_edges(&self) -> Option<NavigationEdges> {
        self.items
            .active_index()
            .map(|index| navigation_edges(index, self.items.len()))
    }

    /// Resolves a pending transition wait.
    ///
    /// A ticket that is not the current pending one belongs to a superseded
    /// move and is ignored. Returns true if the ticket was current.
    pub fn transition_ended(&mut self, ticket: TransitionTicket) -> bool {
        if self.pending_transition != Some(ticket) {
            debug!(carousel_id = %self.id, ticket = ticket.0, "stale transition ignored");
            return false;
        }
        self.pending_transition = None;
        self.on_transition_end();
        true
    }

    /// Applies the stage for `index`.
    pub(crate) fn set_stage(&mut self, index: usize, is_state_change: bool, correlation_id: Uuid) {
        if is_state_change && self.mode.is_large() {
            self.mark_visited(index, correlation_id);
        }

        self.accessibility = apply_accessibility(self.items.len(), index, self.mode);
        self.edges = self.evaluate_navigation_edges();
        self.evaluate_completion(correlation_id);
        self.move_slider_to_index(index);
    }

    fn move_slider_to_index(&mut self, index: usize) {
        let Some(layout) = self.layout else {
            return;
        };
        self.slide_offset = Some(compute_slide_offset(
            layout.item_width,
            index,
            self.text_direction,
        ));

        if self.disable_animation || self.is_initial_render {
            self.pending_transition = None;
            self.on_transition_end();
            return;
        }

        self.last_ticket += 1;
        self.pending_transition = Some(TransitionTicket(self.last_ticket));
    }

    fn on_transition_end(&self) {
        if self.is_initial_render {
            return;
        }
        let Some(index) = self.items.active_index() else {
            return;
        };
        let target = if self.mode.is_large() {
            FocusTarget::ContentPanel { index }
        } else {
            FocusTarget::CompactNavigation
        };
        self.host
            .focus
            .focus_first(target, FocusOptions { defer: true });
    }
}

#[cfg(test)]
mod tests {
    use narrative_carousel_core::config::{HostConfig, ViewportCategory};

    use super::*;
    use crate::domain::carousel::tests::{build, build_with, config};
    use crate::domain::context::FamilyRegistry;

    #[test]
    fn test_offset_is_negative_for_ltr_and_positive_for_rtl() {
        assert_eq!(compute_slide_offset(25.0, 2, TextDirection::LeftToRight), -50.0);
        assert_eq!(compute_slide_offset(25.0, 2, TextDirection::RightToLeft), 50.0);
    }

    #[test]
    fn test_edges_only_at_boundaries() {
        for index in 0..5 {
            let edges = navigation_edges(index, 5);
            assert_eq!(edges.is_at_start, index == 0);
            assert_eq!(edges.is_at_end, index == 4);
        }
    }

    #[test]
    fn test_single_item_is_at_both_edges() {
        assert_eq!(
            navigation_edges(0, 1),
            NavigationEdges {
                is_at_start: true,
                is_at_end: true
            }
        );
    }

    #[test]
    fn test_exactly_one_item_active_after_any_sequence() {
        // Arrange
        let (mut carousel, _harness) = build(5, ViewportCategory::Large);
        carousel.render(Uuid::new_v4());

        // Act / Assert
        for index in [3, 1, 4, 4, 0, 2] {
            assert!(carousel.activate_item(index, Uuid::new_v4()));
            let active: Vec<usize> = carousel
                .items()
                .filter(|item| item.is_active)
                .map(|item| item.index)
                .collect();
            assert_eq!(active, vec![index]);
            assert_eq!(carousel.accessibility().visible_panel_count(), 1);
        }
    }

    #[test]
    fn test_out_of_range_activation_is_rejected() {
        // Arrange
        let (mut carousel, _harness) = build(4, ViewportCategory::Large);
        carousel.render(Uuid::new_v4());
        carousel.activate_item(2, Uuid::new_v4());
        let before = carousel.accessibility().clone();

        // Act
        let rejected_high = carousel.activate_item(4, Uuid::new_v4());

        // Assert
        assert!(!rejected_high);
        assert_eq!(carousel.active_index(), Some(2));
        assert_eq!(carousel.accessibility(), &before);
    }

    #[test]
    fn test_shift_past_either_end_is_rejected() {
        // Arrange
        let (mut carousel, _harness) = build(4, ViewportCategory::Large);
        carousel.render(Uuid::new_v4());

        // Act / Assert
        assert!(!carousel.shift_active(Direction::Previous, Uuid::new_v4()));
        assert_eq!(carousel.active_index(), Some(0));

        carousel.activate_item(3, Uuid::new_v4());
        assert!(!carousel.shift_active(Direction::Next, Uuid::new_v4()));
        assert_eq!(carousel.active_index(), Some(3));

        assert!(carousel.shift_active(Direction::Previous, Uuid::new_v4()));
        assert_eq!(carousel.active_index(), Some(2));
    }

    #[test]
    fn test_large_mode_activation_marks_visited_small_mode_does_not() {
        let (mut large, _) = build(3, ViewportCategory::Large);
        let (mut small, _) = build(3, ViewportCategory::Small);
        large.render(Uuid::new_v4());
        small.render(Uuid::new_v4());

        large.activate_item(2, Uuid::new_v4());
        small.activate_item(2, Uuid::new_v4());

        assert_eq!(large.snapshot().visited, vec![true, false, true]);
        assert_eq!(small.snapshot().visited, vec![false, false, false]);
    }

    #[test]
    fn test_restaging_same_index_is_idempotent() {
        // Arrange
        let (mut carousel, harness) = build(3, ViewportCategory::Large);
        carousel.render(Uuid::new_v4());
        carousel.activate_item(1, Uuid::new_v4());
        let once = carousel.accessibility().clone();
        let activations = harness.notifier.count("carousel.item_activated");

        // Act
        carousel.activate_item(1, Uuid::new_v4());

        // Assert
        assert_eq!(carousel.accessibility(), &once);
        assert_eq!(carousel.edges(), carousel.evaluate_navigation_edges());
        assert_eq!(harness.notifier.count("carousel.item_activated"), activations);
    }

    #[test]
    fn test_completion_fires_once_after_last_visit() {
        // Arrange
        let (mut carousel, harness) = build(3, ViewportCategory::Large);

        // Act / Assert
        carousel.render(Uuid::new_v4());
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 0);
        carousel.activate_item(1, Uuid::new_v4());
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 0);
        carousel.activate_item(2, Uuid::new_v4());
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 1);

        carousel.activate_item(0, Uuid::new_v4());
        carousel.activate_item(0, Uuid::new_v4());
        carousel.detail_closed(Uuid::new_v4());
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 1);
    }

    #[test]
    fn test_slide_offset_follows_text_direction() {
        // Arrange
        let rtl = HostConfig {
            default_direction: TextDirection::RightToLeft,
            ..HostConfig::default()
        };
        let (mut ltr_carousel, _) = build(4, ViewportCategory::Large);
        let (mut rtl_carousel, _) =
            build_with(config(4), ViewportCategory::Large, rtl, FamilyRegistry::new());
        ltr_carousel.render(Uuid::new_v4());
        rtl_carousel.render(Uuid::new_v4());

        // Act
        ltr_carousel.activate_item(2, Uuid::new_v4());
        rtl_carousel.activate_item(2, Uuid::new_v4());

        // Assert
        assert_eq!(ltr_carousel.slide_offset(), Some(-50.0));
        assert_eq!(rtl_carousel.slide_offset(), Some(50.0));
    }

    #[test]
    fn test_animated_move_focuses_after_transition_end() {
        // Arrange
        let (mut carousel, harness) = build(3, ViewportCategory::Large);
        carousel.render(Uuid::new_v4());

        // Act
        carousel.activate_item(1, Uuid::new_v4());
        let ticket = carousel.pending_transition().unwrap();
        assert!(harness.focus.requests().is_empty());
        let resolved = carousel.transition_ended(ticket);

        // Assert
        assert!(resolved);
        assert_eq!(carousel.pending_transition(), None);
        assert_eq!(
            harness.focus.requests(),
            vec![(
                FocusTarget::ContentPanel { index: 1 },
                FocusOptions { defer: true }
            )]
        );
    }

    #[test]
    fn test_new_move_supersedes_pending_transition() {
        // Arrange
        let (mut carousel, harness) = build(3, ViewportCategory::Small);
        carousel.render(Uuid::new_v4());
        carousel.activate_item(1, Uuid::new_v4());
        let stale = carousel.pending_transition().unwrap();

        // Act
        carousel.activate_item(2, Uuid::new_v4());
        let current = carousel.pending_transition().unwrap();
        let stale_resolved = carousel.transition_ended(stale);
        let current_resolved = carousel.transition_ended(current);
        let repeated = carousel.transition_ended(current);

        // Assert
        assert_ne!(stale, current);
        assert!(!stale_resolved);
        assert!(current_resolved);
        assert!(!repeated);
        assert_eq!(
            harness.focus.requests(),
            vec![(FocusTarget::CompactNavigation, FocusOptions { defer: true })]
        );
    }

    #[test]
    fn test_disabled_animation_focuses_immediately() {
        // Arrange
        let host_config = HostConfig {
            disable_animation: true,
            ..HostConfig::default()
        };
        let (mut carousel, harness) = build_with(
            config(3),
            ViewportCategory::Large,
            host_config,
            FamilyRegistry::new(),
        );
        carousel.render(Uuid::new_v4());

        // Act
        carousel.activate_item(2, Uuid::new_v4());

        // Assert
        assert_eq!(carousel.pending_transition(), None);
        assert_eq!(
            harness.focus.requests(),
            vec![(
                FocusTarget::ContentPanel { index: 2 },
                FocusOptions { defer: true }
            )]
        );
    }
}
