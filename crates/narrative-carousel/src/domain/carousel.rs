//! The carousel aggregate.
//!
//! `NarrativeCarousel` owns the item store and every derived state (mode,
//! layout metrics, accessibility map, edge flags, slide offset, pending
//! transition). Navigation lives in `navigation.rs` and viewport handling in
//! `mode_switch.rs`; both extend this type.

use narrative_carousel_core::config::TextDirection;
use narrative_carousel_core::detail::DetailContent;
use narrative_carousel_core::event::EventMetadata;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::accessibility::AccessibilityMap;
use super::completion::CompletionEvaluator;
use super::config::{CompletionTrigger, NarrativeConfig, ResetPolicy};
use super::context::HostContext;
use super::events::{
    AllItemsCompleted, CarouselEvent, CarouselEventKind, ComponentCompleted, ItemVisited,
};
use super::items::{ItemStore, NarrativeItem};
use super::layout::{LayoutMetrics, recompute_widths};
use super::mode::{Mode, resolve_mode};
use super::navigation::{NavigationEdges, TransitionTicket};

/// Where the carousel is in its mount lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// Built from configuration, first stage not yet applied.
    Constructed,
    /// First stage applied; accepting input.
    Rendered,
    /// Replaced by another component; ignores all input.
    TornDown,
}

/// Copy fields carried over from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComponentCopy {
    pub title: String,
    pub body: String,
    pub instruction: String,
    pub mobile_instruction: Option<String>,
    pub original_body: Option<String>,
    pub original_instruction: Option<String>,
}

/// State a host persists between visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    /// Active item, if any.
    pub active_index: Option<usize>,
    /// Visited flags in index order.
    pub visited: Vec<bool>,
    /// Component completion.
    pub is_complete: bool,
}

/// The aggregate root for one carousel instance.
#[derive(Debug)]
pub struct NarrativeCarousel {
    /// Instance identifier.
    pub id: Uuid,
    pub(crate) slot_id: String,
    pub(crate) items: ItemStore,
    pub(crate) mode: Mode,
    pub(crate) layout: Option<LayoutMetrics>,
    pub(crate) is_initial_render: bool,
    pub(crate) was_alternate_family: bool,
    pub(crate) disable_animation: bool,
    pub(crate) text_direction: TextDirection,
    pub(crate) copy: ComponentCopy,
    pub(crate) displayed_instruction: String,
    pub(crate) accessibility: AccessibilityMap,
    pub(crate) edges: Option<NavigationEdges>,
    pub(crate) slide_offset: Option<f64>,
    pub(crate) pending_transition: Option<TransitionTicket>,
    pub(crate) last_ticket: u64,
    pub(crate) completion: CompletionEvaluator,
    pub(crate) completion_trigger: CompletionTrigger,
    pub(crate) is_complete: bool,
    pub(crate) detail_item: Option<usize>,
    pub(crate) is_popup_open: bool,
    pub(crate) lifecycle: Lifecycle,
    sequence: i64,
    pub(crate) host: HostContext,
}

impl NarrativeCarousel {
    /// Builds a carousel from its configuration and host context.
    ///
    /// A configured reset policy clears item state before the first render;
    /// otherwise persisted active and visited flags are kept as-is.
    #[must_use]
    pub fn new(id: Uuid, config: NarrativeConfig, host: HostContext) -> Self {
        let mut items = ItemStore::from_config(&config.items);
        let mut is_complete = config.is_complete;
        if let Some(policy) = config.reset_on_revisit {
            items.reset();
            if policy == ResetPolicy::Hard {
                is_complete = false;
            }
            debug!(carousel_id = %id, ?policy, "item state reset on revisit");
        }

        let mode = resolve_mode(host.viewport);
        let layout = recompute_widths(items.len());
        let completion = CompletionEvaluator::seeded(&items);

        Self {
            id,
            slot_id: config.id,
            items,
            mode,
            layout,
            is_initial_render: true,
            was_alternate_family: config.was_hotgraphic,
            disable_animation: host.config.disable_animation,
            text_direction: host.config.default_direction,
            displayed_instruction: config.instruction.clone(),
            copy: ComponentCopy {
                title: config.title,
                body: config.body,
                instruction: config.instruction,
                mobile_instruction: config.mobile_instruction,
                original_body: config.original_body,
                original_instruction: config.original_instruction,
            },
            accessibility: AccessibilityMap::default(),
            edges: None,
            slide_offset: None,
            pending_transition: None,
            last_ticket: 0,
            completion,
            completion_trigger: config.set_completion_on,
            is_complete,
            detail_item: None,
            is_popup_open: false,
            lifecycle: Lifecycle::Constructed,
            sequence: 0,
            host,
        }
    }

    /// Applies the first stage.
    ///
    /// With no active item the first item is activated; otherwise the existing
    /// active item is re-staged without being counted as a new activation.
    /// Returns false if there is nothing to render.
    pub fn render(&mut self, correlation_id: Uuid) -> bool {
        if self.lifecycle == Lifecycle::TornDown {
            warn!(carousel_id = %self.id, "render requested after teardown");
            return false;
        }
        if self.items.is_empty() {
            debug!(carousel_id = %self.id, "render skipped: no items");
            return false;
        }

        match self.items.active_index() {
            None => {
                self.activate_item(0, correlation_id);
            }
            Some(index) => self.set_stage(index, false, correlation_id),
        }

        self.layout = recompute_widths(self.items.len());
        if !self.mode.is_large() && !self.was_alternate_family {
            self.replace_instructions();
        }
        self.is_initial_render = false;
        self.lifecycle = Lifecycle::Rendered;
        true
    }

    /// Opens the active item in the host's detail popup.
    ///
    /// The item is marked visited once the host reports the popup opened.
    pub fn open_detail(&mut self, _correlation_id: Uuid) -> bool {
        if self.lifecycle == Lifecycle::TornDown {
            warn!(carousel_id = %self.id, "detail requested after teardown");
            return false;
        }
        let Some(item) = self.items.active_item() else {
            debug!(carousel_id = %self.id, "detail requested with no active item");
            return false;
        };

        let content = DetailContent {
            title: item.title.clone(),
            body: item.small_mode_body().to_owned(),
        };
        self.detail_item = Some(item.index);
        self.is_popup_open = true;
        self.host.detail.open_detail(content);
        true
    }

    /// Handles the popup "opened" signal: the shown item becomes visited.
    pub fn detail_opened(&mut self, correlation_id: Uuid) -> bool {
        let Some(index) = self.detail_item.take() else {
            debug!(carousel_id = %self.id, "detail opened with nothing pending");
            return false;
        };
        self.mark_visited(index, correlation_id);
        true
    }

    /// Handles the popup "closed" signal.
    pub fn detail_closed(&mut self, correlation_id: Uuid) -> bool {
        if self.lifecycle == Lifecycle::TornDown {
            return false;
        }
        self.is_popup_open = false;
        self.detail_item = None;
        self.evaluate_completion(correlation_id);
        true
    }

    /// Handles the host reporting the component scrolled into view.
    pub fn in_view(&mut self, correlation_id: Uuid) -> bool {
        if self.lifecycle == Lifecycle::TornDown
            || self.completion_trigger != CompletionTrigger::InView
        {
            return false;
        }
        self.mark_component_complete(correlation_id)
    }

    /// Re-evaluates completion and emits `AllItemsCompleted` on the first
    /// observation of every item visited.
    pub(crate) fn evaluate_completion(&mut self, correlation_id: Uuid) {
        if !self.completion.observe(&self.items) {
            return;
        }
        info!(carousel_id = %self.id, "all items completed");
        self.emit(
            CarouselEventKind::AllItemsCompleted(AllItemsCompleted {
                carousel_id: self.id,
                item_count: self.items.len(),
            }),
            correlation_id,
        );
        if self.completion_trigger == CompletionTrigger::AllItems {
            self.mark_component_complete(correlation_id);
        }
    }

    fn mark_component_complete(&mut self, correlation_id: Uuid) -> bool {
        if self.is_complete {
            return false;
        }
        self.is_complete = true;
        info!(carousel_id = %self.id, "component completed");
        self.emit(
            CarouselEventKind::ComponentCompleted(ComponentCompleted {
                carousel_id: self.id,
            }),
            correlation_id,
        );
        true
    }

    pub(crate) fn mark_visited(&mut self, index: usize, correlation_id: Uuid) {
        match self.items.mark_visited(index) {
            Ok(true) => self.emit(
                CarouselEventKind::ItemVisited(ItemVisited {
                    carousel_id: self.id,
                    index,
                }),
                correlation_id,
            ),
            Ok(false) => {}
            Err(err) => debug!(carousel_id = %self.id, %err, "visit ignored"),
        }
    }

    /// Publishes an event through the host notifier.
    pub(crate) fn emit(&mut self, kind: CarouselEventKind, correlation_id: Uuid) {
        self.sequence += 1;
        let event = CarouselEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                source_id: self.id,
                sequence_number: self.sequence,
                correlation_id,
                occurred_at: self.host.clock.now(),
            },
            kind,
        };
        self.host.notifier.publish(&event);
    }

    /// Drops all item state and stops accepting input.
    pub(crate) fn tear_down(&mut self) {
        self.items.clear();
        self.accessibility = AccessibilityMap::default();
        self.edges = None;
        self.slide_offset = None;
        self.pending_transition = None;
        self.detail_item = None;
        self.is_popup_open = false;
        self.lifecycle = Lifecycle::TornDown;
    }

    /// State a host should persist between visits.
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            active_index: self.items.active_index(),
            visited: self.items.visited(),
            is_complete: self.is_complete,
        }
    }

    /// Slot the carousel is mounted in.
    #[must_use]
    pub fn slot_id(&self) -> &str {
        &self.slot_id
    }

    /// Current display mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the active item, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.items.active_index()
    }

    /// Items in index order.
    pub fn items(&self) -> impl Iterator<Item = &NarrativeItem> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Current layout metrics; `None` for an empty collection.
    #[must_use]
    pub fn layout(&self) -> Option<LayoutMetrics> {
        self.layout
    }

    /// Current accessibility map.
    #[must_use]
    pub fn accessibility(&self) -> &AccessibilityMap {
        &self.accessibility
    }

    /// Edge flags of the last stage.
    #[must_use]
    pub fn edges(&self) -> Option<NavigationEdges> {
        self.edges
    }

    /// Translation applied to the slide track, in percent.
    #[must_use]
    pub fn slide_offset(&self) -> Option<f64> {
        self.slide_offset
    }

    /// The transition wait currently pending, if any.
    #[must_use]
    pub fn pending_transition(&self) -> Option<TransitionTicket> {
        self.pending_transition
    }

    /// Instruction text currently shown.
    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.displayed_instruction
    }

    /// Whether no stage has been applied yet.
    #[must_use]
    pub fn is_initial_render(&self) -> bool {
        self.is_initial_render
    }

    /// Whether this instance was converted from the alternate family.
    #[must_use]
    pub fn was_alternate_family(&self) -> bool {
        self.was_alternate_family
    }

    /// Whether slide animations are skipped.
    #[must_use]
    pub fn disable_animation(&self) -> bool {
        self.disable_animation
    }

    /// Whether the detail popup is open.
    #[must_use]
    pub fn is_popup_open(&self) -> bool {
        self.is_popup_open
    }

    /// Whether the component is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Mount lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Title copy.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.copy.title
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use narrative_carousel_core::config::{HostConfig, ViewportCategory};
    use narrative_carousel_test_support::{
        FixedClock, RecordingDetailPresenter, RecordingFocusManager, RecordingNotifier,
    };

    use super::*;
    use crate::domain::config::ItemConfig;
    use crate::domain::context::FamilyRegistry;

    /// Recording ports shared by carousel tests.
    pub(crate) struct Harness {
        pub focus: Arc<RecordingFocusManager>,
        pub notifier: Arc<RecordingNotifier>,
        pub detail: Arc<RecordingDetailPresenter>,
    }

    pub(crate) fn config(count: usize) -> NarrativeConfig {
        let mut config: NarrativeConfig = serde_json::from_value(serde_json::json!({
            "_id": "c-05",
            "title": "Narrative",
            "body": "Body",
            "instruction": "Select the forward arrow",
            "mobileInstruction": "Select the plus icon",
        }))
        .unwrap();
        config.items = (0..count)
            .map(|i| ItemConfig {
                title: format!("Item {i}"),
                body: format!("Body {i}"),
                ..ItemConfig::default()
            })
            .collect();
        config
    }

    pub(crate) fn build_with(
        config: NarrativeConfig,
        viewport: ViewportCategory,
        host_config: HostConfig,
        registry: FamilyRegistry,
    ) -> (NarrativeCarousel, Harness) {
        let harness = Harness {
            focus: Arc::new(RecordingFocusManager::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            detail: Arc::new(RecordingDetailPresenter::default()),
        };
        let host = HostContext {
            viewport,
            config: host_config,
            focus: harness.focus.clone(),
            notifier: harness.notifier.clone(),
            detail: harness.detail.clone(),
            registry: Arc::new(registry),
            clock: Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            )),
        };
        (NarrativeCarousel::new(Uuid::new_v4(), config, host), harness)
    }

    pub(crate) fn build(count: usize, viewport: ViewportCategory) -> (NarrativeCarousel, Harness) {
        build_with(
            config(count),
            viewport,
            HostConfig::default(),
            FamilyRegistry::new(),
        )
    }

    #[test]
    fn test_render_activates_first_item_without_focus() {
        // Arrange
        let (mut carousel, harness) = build(3, ViewportCategory::Large);

        // Act
        let rendered = carousel.render(Uuid::new_v4());

        // Assert
        assert!(rendered);
        assert_eq!(carousel.active_index(), Some(0));
        assert_eq!(carousel.lifecycle(), Lifecycle::Rendered);
        assert!(!carousel.is_initial_render());
        assert_eq!(carousel.pending_transition(), None);
        assert!(harness.focus.requests().is_empty());
        assert_eq!(carousel.snapshot().visited, vec![true, false, false]);
    }

    #[test]
    fn test_render_in_small_mode_shows_mobile_instruction() {
        let (mut carousel, _harness) = build(3, ViewportCategory::Small);

        carousel.render(Uuid::new_v4());

        assert_eq!(carousel.instruction(), "Select the plus icon");
        assert_eq!(carousel.snapshot().visited, vec![false, false, false]);
    }

    #[test]
    fn test_render_reentry_restages_without_reflagging() {
        // Arrange
        let mut config = config(3);
        config.items[1].is_active = true;
        let (mut carousel, harness) = build_with(
            config,
            ViewportCategory::Large,
            HostConfig::default(),
            FamilyRegistry::new(),
        );

        // Act
        carousel.render(Uuid::new_v4());

        // Assert
        assert_eq!(carousel.active_index(), Some(1));
        assert_eq!(carousel.accessibility().visible_panel(), Some(1));
        assert_eq!(carousel.snapshot().visited, vec![false, false, false]);
        assert_eq!(harness.notifier.count("carousel.item_activated"), 0);
        assert_eq!(harness.notifier.count("carousel.item_visited"), 0);
    }

    #[test]
    fn test_render_reentry_of_completed_carousel_does_not_refire_completion() {
        // Arrange
        let mut config = config(3);
        for item in &mut config.items {
            item.is_visited = true;
        }
        config.items[2].is_active = true;
        config.is_complete = true;
        let (mut carousel, harness) = build_with(
            config,
            ViewportCategory::Large,
            HostConfig::default(),
            FamilyRegistry::new(),
        );

        // Act
        carousel.render(Uuid::new_v4());
        carousel.activate_item(0, Uuid::new_v4());

        // Assert
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 0);
        assert_eq!(harness.notifier.count("carousel.component_completed"), 0);
        assert!(carousel.is_complete());
    }

    #[test]
    fn test_soft_reset_of_completed_carousel_completes_again_after_revisit() {
        // Arrange
        let mut config = config(2);
        for item in &mut config.items {
            item.is_visited = true;
        }
        config.is_complete = true;
        config.reset_on_revisit = Some(ResetPolicy::Soft);
        let (mut carousel, harness) = build_with(
            config,
            ViewportCategory::Large,
            HostConfig::default(),
            FamilyRegistry::new(),
        );

        // Act
        carousel.render(Uuid::new_v4());
        carousel.activate_item(1, Uuid::new_v4());

        // Assert
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 1);
        assert_eq!(harness.notifier.count("carousel.component_completed"), 0);
    }

    #[test]
    fn test_reset_on_revisit_clears_persisted_state() {
        // Arrange
        let mut config = config(2);
        config.items[1].is_active = true;
        config.items[1].is_visited = true;
        config.is_complete = true;
        config.reset_on_revisit = Some(ResetPolicy::Hard);

        // Act
        let (carousel, _harness) = build_with(
            config,
            ViewportCategory::Small,
            HostConfig::default(),
            FamilyRegistry::new(),
        );

        // Assert
        assert_eq!(carousel.active_index(), None);
        assert_eq!(carousel.snapshot().visited, vec![false, false]);
        assert!(!carousel.is_complete());
    }

    #[test]
    fn test_soft_reset_keeps_component_completion() {
        let mut config = config(2);
        config.items[0].is_visited = true;
        config.is_complete = true;
        config.reset_on_revisit = Some(ResetPolicy::Soft);

        let (carousel, _harness) = build_with(
            config,
            ViewportCategory::Small,
            HostConfig::default(),
            FamilyRegistry::new(),
        );

        assert_eq!(carousel.snapshot().visited, vec![false, false]);
        assert!(carousel.is_complete());
    }

    #[test]
    fn test_render_empty_collection_is_noop() {
        let (mut carousel, harness) = build(0, ViewportCategory::Large);

        assert!(!carousel.render(Uuid::new_v4()));
        assert_eq!(carousel.layout(), None);
        assert_eq!(carousel.active_index(), None);
        assert!(harness.notifier.event_types().is_empty());
    }

    #[test]
    fn test_detail_opened_marks_shown_item_visited() {
        // Arrange
        let mut config = config(2);
        config.items[0].mobile_body = Some("Short body".to_owned());
        let (mut carousel, harness) = build_with(
            config,
            ViewportCategory::Small,
            HostConfig::default(),
            FamilyRegistry::new(),
        );
        carousel.render(Uuid::new_v4());

        // Act
        assert!(carousel.open_detail(Uuid::new_v4()));
        carousel.detail_opened(Uuid::new_v4());

        // Assert
        let opened = harness.detail.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].title, "Item 0");
        assert_eq!(opened[0].body, "Short body");
        assert!(carousel.is_popup_open());
        assert_eq!(carousel.snapshot().visited, vec![true, false]);
        assert_eq!(harness.notifier.count("carousel.item_visited"), 1);
    }

    #[test]
    fn test_detail_opened_without_open_request_is_ignored() {
        let (mut carousel, _harness) = build(2, ViewportCategory::Small);
        carousel.render(Uuid::new_v4());

        assert!(!carousel.detail_opened(Uuid::new_v4()));
        assert_eq!(carousel.snapshot().visited, vec![false, false]);
    }

    #[test]
    fn test_detail_closed_evaluates_completion_once() {
        // Arrange
        let (mut carousel, harness) = build(1, ViewportCategory::Small);
        carousel.render(Uuid::new_v4());
        carousel.open_detail(Uuid::new_v4());
        carousel.detail_opened(Uuid::new_v4());

        // Act
        carousel.detail_closed(Uuid::new_v4());
        carousel.detail_closed(Uuid::new_v4());

        // Assert
        assert!(!carousel.is_popup_open());
        assert_eq!(harness.notifier.count("carousel.all_items_completed"), 1);
        assert_eq!(harness.notifier.count("carousel.component_completed"), 1);
        assert!(carousel.is_complete());
    }

    #[test]
    fn test_in_view_completes_only_with_inview_trigger() {
        // Arrange
        let mut inview = config(2);
        inview.set_completion_on = CompletionTrigger::InView;
        let (mut carousel, harness) = build_with(
            inview,
            ViewportCategory::Small,
            HostConfig::default(),
            FamilyRegistry::new(),
        );
        let (mut default_carousel, _) = build(2, ViewportCategory::Small);

        // Act
        let completed = carousel.in_view(Uuid::new_v4());
        let repeated = carousel.in_view(Uuid::new_v4());

        // Assert
        assert!(completed);
        assert!(!repeated);
        assert!(!default_carousel.in_view(Uuid::new_v4()));
        assert_eq!(harness.notifier.count("carousel.component_completed"), 1);
    }

    #[test]
    fn test_events_carry_sequence_and_clock_time() {
        // Arrange
        let (mut carousel, harness) = build(2, ViewportCategory::Large);
        let correlation_id = Uuid::new_v4();

        // Act
        carousel.render(correlation_id);

        // Assert
        let events = harness.notifier.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].metadata.event_type, "carousel.item_activated");
        assert_eq!(events[1].metadata.event_type, "carousel.item_visited");
        assert_eq!(events[0].metadata.sequence_number, 1);
        assert_eq!(events[1].metadata.sequence_number, 2);
        assert_eq!(events[0].metadata.source_id, carousel.id);
        assert_eq!(events[0].metadata.correlation_id, correlation_id);
        assert_eq!(
            events[0].metadata.occurred_at,
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
        );
    }
}
