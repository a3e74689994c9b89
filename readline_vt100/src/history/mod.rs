// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod history_store;

// Re-export.
pub use history_store::*;

// Constants.
pub const HISTORY_SIZE_MAX: usize = 1_000;
