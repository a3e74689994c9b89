// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// Named editing commands produced by the [`crate::DecoderState`] state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EditCommand {
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    DeleteBackward,
    DeleteForward,
    HistoryPrev,
    HistoryNext,
    KillToEnd,
    DeletePrevWord,
    Transpose,
    ClearScreen,
    /// Throw away the line being edited and start over (`Ctrl+U`).
    ResetLine,
    Accept,
    Cancel,
    Complete,
    /// `Ctrl+D`: end of input on an empty line, otherwise delete forward.
    EndOfInput,
}

/// One fully decoded key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodedKey {
    /// A literal code point to insert at the cursor.
    Insert(char),
    /// A named editing command.
    Command(EditCommand),
    /// A recognized but unsupported (or unknown) sequence that was fully consumed.
    Ignore,
}

impl From<EditCommand> for DecodedKey {
    fn from(command: EditCommand) -> Self { DecodedKey::Command(command) }
}
