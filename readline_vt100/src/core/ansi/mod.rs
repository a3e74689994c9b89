// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod input_constants;
pub mod output_sequence;

// Re-export.
pub use input_constants::*;
pub use output_sequence::*;
