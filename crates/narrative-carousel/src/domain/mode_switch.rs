//! Viewport changes and the one-time alternate-family handoff.

use narrative_carousel_core::config::ViewportCategory;
use narrative_carousel_core::error::DomainError;
use narrative_carousel_core::registry::MountedComponent;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::carousel::{Lifecycle, NarrativeCarousel};
use super::config::HOTGRAPHIC_FAMILY;
use super::events::{CarouselEventKind, ModeChanged, RelayoutRequested};
use super::items::NarrativeItem;
use super::layout::recompute_widths;
use super::mode::{Mode, resolve_mode};

/// Model handed to the alternate family's factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateFamilyModel {
    /// Slot the replacement is mounted in.
    pub slot_id: String,
    /// Family the model now belongs to.
    pub component: String,
    /// Outward-facing title.
    pub title: String,
    /// Outward-facing body, restored from the pre-conversion copy.
    pub body: String,
    /// Instruction text, restored from the pre-conversion copy.
    pub instruction: String,
    /// Popup state; always closed on handoff.
    pub is_popup_open: bool,
    /// Item data with every active flag cleared.
    pub items: Vec<NarrativeItem>,
}

/// A completed handoff: the host inserts `replacement` into `slot_id`.
#[derive(Debug)]
pub struct Handoff {
    /// Slot to insert the replacement into.
    pub slot_id: String,
    /// The newly constructed component.
    pub replacement: Box<dyn MountedComponent>,
}

/// Result of a viewport-change notification.
#[derive(Debug)]
pub enum ViewportOutcome {
    /// Mode unchanged; the active item was re-staged.
    Restaged {
        /// The current mode.
        mode: Mode,
    },
    /// Mode changed; widths and instructions were refreshed and the active
    /// item re-staged.
    ModeChanged {
        /// Mode before the change.
        from: Mode,
        /// Mode after the change.
        to: Mode,
    },
    /// The carousel replaced itself and is torn down.
    HandedOff(Handoff),
    /// The carousel is torn down and ignored the notification.
    Ignored,
}

impl NarrativeCarousel {
    /// Reacts to a viewport change.
    ///
    /// An alternate-family instance entering large mode hands its slot back to
    /// the alternate family instead of re-rendering.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnregisteredFamily` if a handoff is due but the
    /// alternate family is not registered. Nothing is mutated in that case and
    /// the carousel stays mounted.
    pub fn on_viewport_changed(
        &mut self,
        category: ViewportCategory,
        correlation_id: Uuid,
    ) -> Result<ViewportOutcome, DomainError> {
        if self.lifecycle == Lifecycle::TornDown {
            warn!(carousel_id = %self.id, "viewport change after teardown");
            return Ok(ViewportOutcome::Ignored);
        }

        let mode = resolve_mode(category);
        if self.was_alternate_family && mode.is_large() {
            return self.hand_off(correlation_id).map(ViewportOutcome::HandedOff);
        }

        let previous = self.mode;
        self.mode = mode;
        if previous != mode {
            info!(carousel_id = %self.id, from = ?previous, to = ?mode, "mode changed");
            self.emit(
                CarouselEventKind::ModeChanged(ModeChanged {
                    carousel_id: self.id,
                    from: previous,
                    to: mode,
                }),
                correlation_id,
            );
            self.layout = recompute_widths(self.items.len());
            self.replace_instructions();
        }

        self.edges = self.evaluate_navigation_edges();
        if let Some(index) = self.items.active_index() {
            self.set_stage(index, false, correlation_id);
        }

        Ok(if previous == mode {
            ViewportOutcome::Restaged { mode }
        } else {
            ViewportOutcome::ModeChanged {
                from: previous,
                to: mode,
            }
        })
    }

    /// Shows the instruction text for the current mode.
    ///
    /// Large mode always shows the primary text. Small mode switches to the
    /// mobile text only when one is configured and this is not an
    /// alternate-family instance; otherwise the current text stays.
    pub(crate) fn replace_instructions(&mut self) {
        if self.mode.is_large() {
            self.displayed_instruction.clone_from(&self.copy.instruction);
            return;
        }
        if self.was_alternate_family {
            return;
        }
        if let Some(mobile) = &self.copy.mobile_instruction {
            self.displayed_instruction.clone_from(mobile);
        }
    }

    fn hand_off(&mut self, correlation_id: Uuid) -> Result<Handoff, DomainError> {
        let factory = self
            .host
            .registry
            .resolve(HOTGRAPHIC_FAMILY)
            .inspect_err(|err| warn!(carousel_id = %self.id, %err, "handoff aborted"))?;

        self.items.reset_active();
        let model = self.alternate_family_model();
        let replacement = factory.construct(model);
        let slot_id = self.slot_id.clone();

        info!(carousel_id = %self.id, slot_id = %slot_id, "handed off to {HOTGRAPHIC_FAMILY}");
        self.tear_down();
        self.emit(
            CarouselEventKind::RelayoutRequested(RelayoutRequested {
                carousel_id: self.id,
                slot_id: slot_id.clone(),
                family: HOTGRAPHIC_FAMILY.to_owned(),
            }),
            correlation_id,
        );

        Ok(Handoff {
            slot_id,
            replacement,
        })
    }

    fn alternate_family_model(&self) -> AlternateFamilyModel {
        AlternateFamilyModel {
            slot_id: self.slot_id.clone(),
            component: HOTGRAPHIC_FAMILY.to_owned(),
            title: self.copy.title.clone(),
            body: self
                .copy
                .original_body
                .clone()
                .unwrap_or_else(|| self.copy.body.clone()),
            instruction: self
                .copy
                .original_instruction
                .clone()
                .unwrap_or_else(|| self.copy.instruction.clone()),
            is_popup_open: false,
            items: self.items.iter().cloned().collect(),
        }
    }
}
