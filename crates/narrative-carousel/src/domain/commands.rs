//! Commands for the carousel context.

use narrative_carousel_core::config::ViewportCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::navigation::{Direction, TransitionTicket};

/// A discrete input from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselInput {
    /// The component finished rendering; apply the first stage.
    Render,
    /// A progress indicator was clicked.
    SelectItem {
        /// Target index.
        index: usize,
    },
    /// A previous/next control was clicked.
    Navigate {
        /// Step direction.
        direction: Direction,
    },
    /// The viewport was resized or changed category.
    ViewportChanged {
        /// New category.
        category: ViewportCategory,
    },
    /// The small-mode "open popup" control was clicked.
    OpenDetail,
    /// The popup reported it opened.
    DetailOpened,
    /// The popup reported it closed.
    DetailClosed,
    /// The slide track finished a transition.
    TransitionEnded {
        /// Ticket of the move that finished.
        ticket: TransitionTicket,
    },
    /// The component scrolled into view.
    InView,
}

impl CarouselInput {
    /// The type name for this input (for logging).
    #[must_use]
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::SelectItem { .. } => "select_item",
            Self::Navigate { .. } => "navigate",
            Self::ViewportChanged { .. } => "viewport_changed",
            Self::OpenDetail => "open_detail",
            Self::DetailOpened => "detail_opened",
            Self::DetailClosed => "detail_closed",
            Self::TransitionEnded { .. } => "transition_ended",
            Self::InView => "in_view",
        }
    }
}

/// Command wrapping one input with its correlation ID.
#[derive(Debug, Clone, Copy)]
pub struct CarouselCommand {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The input to apply.
    pub input: CarouselInput,
}

impl CarouselCommand {
    /// Wraps `input` with a fresh correlation ID.
    #[must_use]
    pub fn new(input: CarouselInput) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            input,
        }
    }
}
