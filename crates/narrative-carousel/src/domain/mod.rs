//! Domain model for the carousel context.

pub mod accessibility;
pub mod carousel;
pub mod commands;
pub mod completion;
pub mod config;
pub mod context;
pub mod events;
pub mod items;
pub mod layout;
pub mod mode;
pub mod mode_switch;
pub mod navigation;
