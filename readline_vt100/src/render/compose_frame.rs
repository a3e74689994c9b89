// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CsiSequence, Dimensions, LineGeometry, NEW_ROW, RenderInput, RenderState};
use std::fmt::Write as _;

/// Build the bytes that repaint the editing area, and update `state` to describe the
/// frame that was built. The caller writes the frame and flushes once.
///
/// 1. Move down to the lowest row used so far, then erase and move up row by row until
///    the first row is reached.
/// 2. Print the prompt, the buffer, and the styled hint, then erase the rest of the row.
/// 3. If the content filled its last row exactly, start a new row so the terminal cursor
///    matches the computed end position.
/// 4. Move up from the end row to the cursor row, then right to the cursor column.
pub fn compose_frame(
    state: &mut RenderState,
    input: &RenderInput<'_>,
    dimensions: Dimensions,
    width_fn: &dyn Fn(char) -> usize,
) -> String {
    let geometry = LineGeometry::compute(state, input, dimensions, width_fn);
    let old_rows = state.max_rows();
    let max_rows = old_rows.max(geometry.end.row);

    let mut acc = String::new();

    if old_rows > geometry.old_cursor.row {
        push_csi(&mut acc, CsiSequence::CursorDown(old_rows - geometry.old_cursor.row));
    }
    for _ in 0..old_rows {
        push_csi(&mut acc, CsiSequence::EraseEntireLine);
        push_csi(&mut acc, CsiSequence::CursorUp(1));
    }

    acc.push('\r');
    acc.push_str(input.prompt);
    acc.extend(input.buffer.iter());
    if let Some(hint) = input.hint {
        acc.push_str(&hint.styled());
    }
    push_csi(&mut acc, CsiSequence::EraseToEndOfLine);

    if geometry.ends_on_row_boundary() {
        acc.push_str(NEW_ROW);
    }

    if geometry.end.row > geometry.cursor.row {
        push_csi(&mut acc, CsiSequence::CursorUp(geometry.end.row - geometry.cursor.row));
    }

    acc.push('\r');
    if geometry.cursor.col > 0 {
        push_csi(&mut acc, CsiSequence::CursorForward(geometry.cursor.col));
    }

    state.record(input.cursor, geometry.cursor_width, max_rows);
    acc
}

fn push_csi(acc: &mut String, sequence: CsiSequence) {
    // Writing to a String can't fail.
    let _ = write!(acc, "{sequence}");
}
