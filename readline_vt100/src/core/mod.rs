// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi;
pub mod char_width;
pub mod dimensions;
pub mod log;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use char_width::*;
pub use dimensions::*;
pub use log::*;
