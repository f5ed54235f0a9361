//! Narrative Carousel: the carousel bounded context.
//!
//! Responsible for active-item navigation, responsive mode resolution, layout
//! metrics, accessibility propagation, completion tracking, and the one-time
//! handoff to an alternate component family.

pub mod application;
pub mod domain;
