// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequences written to the remote terminal.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Audible alert (BEL).
pub const BELL: &str = "\x07";

/// Home the cursor then erase the entire display.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Save cursor (DECSC), park the cursor in the bottom right corner, then request a
/// cursor position report (DSR 6). The terminal clamps the cursor to its real size, so
/// the report carries the terminal dimensions.
pub const QUERY_DIMENSIONS: &str = "\x1b7\x1b[999;999H\x1b[6n";

/// Restore the cursor saved by [`QUERY_DIMENSIONS`] (DECRC).
pub const RESTORE_CURSOR: &str = "\x1b8";

/// Carriage return + line feed, used to move onto the next row after an exact width
/// wrap (the terminal leaves the cursor parked on the last column until more output
/// arrives).
pub const NEW_ROW: &str = "\n\r";

/// The CSI sequences the renderer needs. [`Display`] produces the exact bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CsiSequence {
    /// `CSI n A`
    CursorUp(usize),
    /// `CSI n B`
    CursorDown(usize),
    /// `CSI n C`
    CursorForward(usize),
    /// `CSI 0 K`: erase from cursor to end of line.
    EraseToEndOfLine,
    /// `CSI 2 K`: erase the whole line.
    EraseEntireLine,
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CsiSequence::CursorUp(n) => write!(f, "\x1b[{n}A"),
            CsiSequence::CursorDown(n) => write!(f, "\x1b[{n}B"),
            CsiSequence::CursorForward(n) => write!(f, "\x1b[{n}C"),
            CsiSequence::EraseToEndOfLine => write!(f, "\x1b[0K"),
            CsiSequence::EraseEntireLine => write!(f, "\x1b[2K"),
        }
    }
}
