// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod decoder_state;
pub mod edit_command;
pub mod key_decoder_impl;

// Re-export.
pub use decoder_state::*;
pub use edit_command::*;
pub use key_decoder_impl::*;
