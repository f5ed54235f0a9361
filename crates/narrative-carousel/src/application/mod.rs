//! Application layer: command dispatch and view-model queries.

pub mod command_handlers;
pub mod query_handlers;
