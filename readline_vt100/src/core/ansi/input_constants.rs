// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw bytes sent by a VT100 compatible terminal in raw mode, for the keys the line
//! editor understands.
//!
//! # C0 control keys
//!
//! | Byte | Key      | Meaning in the editor        |
//! |------|----------|------------------------------|
//! | 1    | Ctrl+A   | move to start of line        |
//! | 2    | Ctrl+B   | move left                    |
//! | 3    | Ctrl+C   | cancel (interrupted)         |
//! | 4    | Ctrl+D   | end of input / delete        |
//! | 5    | Ctrl+E   | move to end of line          |
//! | 6    | Ctrl+F   | move right                   |
//! | 8    | Ctrl+H   | backspace                    |
//! | 9    | Tab      | complete                     |
//! | 11   | Ctrl+K   | kill to end of line          |
//! | 12   | Ctrl+L   | clear screen                 |
//! | 13   | Enter    | accept line                  |
//! | 14   | Ctrl+N   | next history entry           |
//! | 16   | Ctrl+P   | previous history entry       |
//! | 20   | Ctrl+T   | transpose characters         |
//! | 21   | Ctrl+U   | reset line                   |
//! | 23   | Ctrl+W   | delete previous word         |
//! | 27   | Esc      | starts an escape sequence    |
//! | 127  | DEL      | backspace                    |
//!
//! # Escape sequences
//!
//! - CSI (`ESC [`): `A` up, `B` down, `C` right, `D` left, `H` home, `F` end, `3 ~`
//!   delete. Any other single digit parameter swallows exactly one terminator byte.
//! - SS3 (`ESC O`): `H` home, `F` end.

pub const CTRL_A: u8 = 0x01;
pub const CTRL_B: u8 = 0x02;
pub const CTRL_C: u8 = 0x03;
pub const CTRL_D: u8 = 0x04;
pub const CTRL_E: u8 = 0x05;
pub const CTRL_F: u8 = 0x06;
pub const CTRL_H: u8 = 0x08;
pub const TAB: u8 = b'\t';
pub const CTRL_K: u8 = 0x0B;
pub const CTRL_L: u8 = 0x0C;
pub const ENTER: u8 = b'\r';
pub const CTRL_N: u8 = 0x0E;
pub const CTRL_P: u8 = 0x10;
pub const CTRL_T: u8 = 0x14;
pub const CTRL_U: u8 = 0x15;
pub const CTRL_W: u8 = 0x17;
pub const ESC: u8 = 0x1B;
pub const BACKSPACE: u8 = 0x7F;

/// Second byte of a CSI sequence: `ESC [`.
pub const CSI_BRACKET: u8 = b'[';

/// Second byte of an SS3 sequence: `ESC O`.
pub const SS3_O: u8 = b'O';

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';
pub const HOME_FINAL: u8 = b'H';
pub const END_FINAL: u8 = b'F';

/// `ESC [ 3 ~` is the Delete key.
pub const DELETE_PARAM: u8 = b'3';

/// Terminator of `ESC [ n ~` sequences.
pub const TILDE_TERMINATOR: u8 = b'~';

/// Used in place of an invalid UTF-8 sequence.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';
