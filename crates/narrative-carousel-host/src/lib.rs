//! Narrative Carousel host: port adapters, document loading and scripted
//! replay.

pub mod adapters;
pub mod error;
pub mod loader;
pub mod replay;
