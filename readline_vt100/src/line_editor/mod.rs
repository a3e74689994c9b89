// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod dimension_query;
pub mod event_handlers;
pub mod line_editor_api;
pub mod line_editor_config;
pub mod readline_event;

#[cfg(test)]
mod integration_tests;

// Re-export.
pub use dimension_query::*;
pub use line_editor_api::*;
pub use line_editor_config::*;
pub use readline_event::*;
