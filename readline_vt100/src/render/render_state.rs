// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What the previous frame left on screen. The next frame needs it to find its way back
/// to the first row of the editing area before repainting.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    old_cursor_offset: usize,
    old_cursor_width: usize,
    max_rows: usize,
}

impl RenderState {
    /// Forget the previous frame, eg: at the start of a line or after the screen was
    /// cleared.
    pub fn reset(&mut self) { *self = Self::default(); }

    /// Cursor offset (in code points) of the previous frame.
    #[must_use]
    pub fn old_cursor_offset(&self) -> usize { self.old_cursor_offset }

    /// Columns from the start of the prompt to the cursor of the previous frame.
    #[must_use]
    pub fn old_cursor_width(&self) -> usize { self.old_cursor_width }

    /// Lowest row (0 based) any frame of this line has reached.
    #[must_use]
    pub fn max_rows(&self) -> usize { self.max_rows }

    pub(crate) fn record(
        &mut self,
        cursor_offset: usize,
        cursor_width: usize,
        max_rows: usize,
    ) {
        self.old_cursor_offset = cursor_offset;
        self.old_cursor_width = cursor_width;
        self.max_rows = max_rows;
    }
}
