// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display width of a single [`char`], in terminal columns.
//!
//! The renderer never assumes that byte length (or code point count) equals column
//! width. Every width it needs is computed by summing a [`WidthFn`] over code points.
//! This keeps wide (CJK, emoji) and zero width code points in one code path.

use unicode_width::UnicodeWidthChar;

/// Columns occupied by a literal tab with [`default_char_width`].
pub const TAB_DISPLAY_WIDTH: usize = 4;

/// Pluggable width function: maps one code point to the number of display columns it
/// occupies (may be `0`).
pub type WidthFn = Box<dyn Fn(char) -> usize + Send>;

/// Every code point is 1 column wide, except a tab which is [`TAB_DISPLAY_WIDTH`].
#[must_use]
pub fn default_char_width(ch: char) -> usize {
    if ch == '\t' { TAB_DISPLAY_WIDTH } else { 1 }
}

/// Width as reported by the [`unicode_width`] crate. Wide CJK and emoji code points are
/// 2 columns, control characters (other than tab) and combining marks are 0.
#[must_use]
pub fn unicode_char_width(ch: char) -> usize {
    if ch == '\t' {
        return TAB_DISPLAY_WIDTH;
    }
    ch.width().unwrap_or(0)
}

/// Sum of `width_fn` over `chars`.
pub fn display_width_of(
    chars: impl IntoIterator<Item = char>,
    width_fn: &dyn Fn(char) -> usize,
) -> usize {
    chars.into_iter().map(width_fn).sum()
}
