// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Dimensions, Hint, RenderState, display_width_of};

/// Row and column of a display position, both 0 based, relative to the first column of
/// the prompt.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RowCol {
    pub row: usize,
    pub col: usize,
}

impl RowCol {
    /// Where `width` columns of output end up when the terminal wraps every `cols`.
    #[must_use]
    pub fn from_width(width: usize, cols: usize) -> Self {
        let cols = cols.max(1);
        Self {
            row: width / cols,
            col: width % cols,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub prompt: &'a str,
    pub buffer: &'a [char],
    pub cursor: usize,
    pub hint: Option<&'a Hint>,
}

/// Where things are on screen for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineGeometry {
    /// End of all drawn content (prompt, buffer, hint).
    pub end: RowCol,
    pub cursor: RowCol,
    pub old_cursor: RowCol,
    /// Columns from the start of the prompt to the cursor.
    pub cursor_width: usize,
    /// Columns of all drawn content.
    pub end_width: usize,
}

impl LineGeometry {
    pub fn compute(
        state: &RenderState,
        input: &RenderInput<'_>,
        dimensions: Dimensions,
        width_fn: &dyn Fn(char) -> usize,
    ) -> Self {
        let cols = dimensions.cols();

        let prompt = strip_ansi_escapes::strip_str(input.prompt);
        let prompt_width = display_width_of(prompt.chars(), width_fn);
        let cursor = input.cursor.min(input.buffer.len());
        let before_cursor_width =
            display_width_of(input.buffer[..cursor].iter().copied(), width_fn);
        let buffer_width = display_width_of(input.buffer.iter().copied(), width_fn);
        let hint_width = input
            .hint
            .map_or(0, |hint| display_width_of(hint.message.chars(), width_fn));

        let cursor_width = prompt_width + before_cursor_width;
        let end_width = prompt_width + buffer_width + hint_width;

        Self {
            end: RowCol::from_width(end_width, cols),
            cursor: RowCol::from_width(cursor_width, cols),
            old_cursor: RowCol::from_width(state.old_cursor_width(), cols),
            cursor_width,
            end_width,
        }
    }

    /// The drawn content fills its last row exactly. The terminal leaves the cursor in
    /// the last column instead of moving to the next row, so a new row has to be
    /// started by hand.
    #[must_use]
    pub fn ends_on_row_boundary(&self) -> bool { self.end_width > 0 && self.end.col == 0 }
}
