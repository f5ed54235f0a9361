//! Command handlers for the carousel context.
//!
//! `handle_command` is the single directional entry point: every host signal
//! (click, resize, popup lifecycle, transition end) is turned into a
//! `CarouselCommand` and applied here. Nothing in the domain calls back into
//! the host except through the ports in the host context.

use narrative_carousel_core::error::DomainError;
use tracing::{info, instrument};

use crate::domain::carousel::NarrativeCarousel;
use crate::domain::commands::{CarouselCommand, CarouselInput};
use crate::domain::mode_switch::{Handoff, ViewportOutcome};

/// What applying a command did.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The input changed or re-applied carousel state.
    Applied,
    /// The input was rejected as a no-op.
    Ignored,
    /// The carousel replaced itself; the host mounts the replacement.
    HandedOff(Handoff),
}

impl CommandOutcome {
    fn from_applied(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Ignored }
    }
}

/// Applies `command` to `carousel`.
///
/// # Errors
///
/// Returns `DomainError::UnregisteredFamily` when a viewport change requires a
/// handoff to a family the host never registered. The carousel is unchanged
/// and still mounted in that case.
#[instrument(
    skip(carousel, command),
    fields(
        carousel_id = %carousel.id,
        correlation_id = %command.correlation_id,
        input = command.input.input_type(),
    )
)]
pub fn handle_command(
    carousel: &mut NarrativeCarousel,
    command: &CarouselCommand,
) -> Result<CommandOutcome, DomainError> {
    let correlation_id = command.correlation_id;
    let outcome = match command.input {
        CarouselInput::Render => CommandOutcome::from_applied(carousel.render(correlation_id)),
        CarouselInput::SelectItem { index } => {
            CommandOutcome::from_applied(carousel.activate_item(index, correlation_id))
        }
        CarouselInput::Navigate { direction } => {
            CommandOutcome::from_applied(carousel.shift_active(direction, correlation_id))
        }
        CarouselInput::ViewportChanged { category } => {
            match carousel.on_viewport_changed(category, correlation_id)? {
                ViewportOutcome::HandedOff(handoff) => {
                    info!(slot_id = %handoff.slot_id, "carousel handed off");
                    CommandOutcome::HandedOff(handoff)
                }
                ViewportOutcome::Ignored => CommandOutcome::Ignored,
                ViewportOutcome::Restaged { .. } | ViewportOutcome::ModeChanged { .. } => {
                    CommandOutcome::Applied
                }
            }
        }
        CarouselInput::OpenDetail => {
            CommandOutcome::from_applied(carousel.open_detail(correlation_id))
        }
        CarouselInput::DetailOpened => {
            CommandOutcome::from_applied(carousel.detail_opened(correlation_id))
        }
        CarouselInput::DetailClosed => {
            CommandOutcome::from_applied(carousel.detail_closed(correlation_id))
        }
        CarouselInput::TransitionEnded { ticket } => {
            CommandOutcome::from_applied(carousel.transition_ended(ticket))
        }
        CarouselInput::InView => CommandOutcome::from_applied(carousel.in_view(correlation_id)),
    };
    Ok(outcome)
}
