//! Narrative Carousel Core: shared ports and domain abstractions.
//!
//! This crate defines the capabilities a host environment provides to a
//! carousel (focus management, notifications, detail popups, component
//! registry, time) and the error and event types every context shares.
//! It contains no infrastructure code.

pub mod clock;
pub mod config;
pub mod detail;
pub mod error;
pub mod event;
pub mod focus;
pub mod notifier;
pub mod registry;
