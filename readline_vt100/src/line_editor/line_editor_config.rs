// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Dimensions, HISTORY_SIZE_MAX};

/// Plain data settings for a [`crate::LineEditor`]. Providers (completion, hint, width)
/// are set with the builder methods on the editor instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditorConfig {
    /// Printed before the buffer on every redraw. It may contain ANSI styling, which
    /// does not count towards its width.
    pub prompt: String,
    /// Initial size. The editor keeps the live value in a
    /// [`crate::DimensionsHandle`].
    pub dimensions: Dimensions,
    pub history_max_size: usize,
}

impl Default for LineEditorConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            dimensions: Dimensions::default(),
            history_max_size: HISTORY_SIZE_MAX,
        }
    }
}

/// Values of `TERM` that this editor is known to work with, in addition to anything
/// that understands the VT100 subset it emits.
#[must_use]
pub fn supported_terms() -> &'static [&'static str] { &["dumb", "cons25", "emacs"] }
