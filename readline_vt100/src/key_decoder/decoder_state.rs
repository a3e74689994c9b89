// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words multibyte

//! Finite state machine that turns raw input bytes into [`DecodedKey`]s.
//!
//! The machine is pure: [`DecoderState::advance`] takes the current state and one byte
//! and returns a [`Transition`]. No I/O happens here, so every legal and illegal byte
//! sequence can be enumerated in tests. [`crate::KeyDecoder`] drives it from a reader.
//!
//! ```text
//!             ┌──────── ESC ────────┐
//!             │                     ▼
//!   ┌─────────┴─┐   other     ┌──────────┐
//!   │  Normal   │◀────────────┤ EscSeen  │
//!   └─┬───────▲─┘             └─┬──────┬─┘
//!     │ UTF-8 │                 │ [    │ O
//!     ▼ lead  │ done            ▼      ▼
//!   ┌─────────┴─┐         ┌─────────┐ ┌─────────┐
//!   │Utf8Pending│         │ CsiSeen │ │ Ss3Seen │
//!   └───────────┘         └─┬─────┬─┘ └─────────┘
//!                       0-2,│     │ 3
//!                       4-9 ▼     ▼
//!               ┌────────────┐  ┌─────────────┐
//!               │CsiParamSeen│  │CsiDeleteSeen│
//!               └────────────┘  └─────────────┘
//! ```

use crate::{ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL,
            BACKSPACE, CSI_BRACKET, CTRL_A, CTRL_B, CTRL_C, CTRL_D, CTRL_E, CTRL_F,
            CTRL_H, CTRL_K, CTRL_L, CTRL_N, CTRL_P, CTRL_T, CTRL_U, CTRL_W, DELETE_PARAM,
            DecodedKey, ENTER, END_FINAL, ESC, EditCommand, HOME_FINAL,
            REPLACEMENT_CHARACTER, SS3_O, TAB, TILDE_TERMINATOR};
use strum_macros::Display;

/// Maximum length of a UTF-8 encoded code point.
const UTF8_MAX_LEN: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum DecoderState {
    /// Between keys.
    #[default]
    Normal,
    /// Saw the lead byte of a multibyte UTF-8 code point.
    Utf8Pending {
        bytes: [u8; UTF8_MAX_LEN],
        len: usize,
        expected: usize,
    },
    /// Saw `ESC`.
    EscSeen,
    /// Saw `ESC [`.
    CsiSeen,
    /// Saw `ESC [ <digit>` (other than `3`), one terminator byte is left to swallow.
    CsiParamSeen,
    /// Saw `ESC [ 3`, expecting `~`.
    CsiDeleteSeen,
    /// Saw `ESC O`.
    Ss3Seen,
}

/// Result of feeding one byte to [`DecoderState::advance`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The byte was consumed, more bytes are needed.
    Pending(DecoderState),
    /// The byte was consumed and completed a key. The machine is back to
    /// [`DecoderState::Normal`].
    Done(DecodedKey),
    /// The key is complete but this byte is not part of it. The byte must be fed again,
    /// starting from [`DecoderState::Normal`].
    DoneWithoutConsuming(DecodedKey),
}

impl DecoderState {
    #[must_use]
    pub fn is_normal(&self) -> bool { matches!(self, DecoderState::Normal) }

    #[must_use]
    pub fn advance(self, byte: u8) -> Transition {
        match self {
            DecoderState::Normal => advance_normal(byte),
            DecoderState::Utf8Pending {
                bytes,
                len,
                expected,
            } => advance_utf8(bytes, len, expected, byte),
            DecoderState::EscSeen => match byte {
                CSI_BRACKET => Transition::Pending(DecoderState::CsiSeen),
                SS3_O => Transition::Pending(DecoderState::Ss3Seen),
                _ => Transition::Done(DecodedKey::Ignore),
            },
            DecoderState::CsiSeen => match byte {
                ARROW_UP_FINAL => done(EditCommand::HistoryPrev),
                ARROW_DOWN_FINAL => done(EditCommand::HistoryNext),
                ARROW_RIGHT_FINAL => done(EditCommand::MoveRight),
                ARROW_LEFT_FINAL => done(EditCommand::MoveLeft),
                HOME_FINAL => done(EditCommand::MoveHome),
                END_FINAL => done(EditCommand::MoveEnd),
                DELETE_PARAM => Transition::Pending(DecoderState::CsiDeleteSeen),
                b'0'..=b'2' | b'4'..=b'9' => {
                    Transition::Pending(DecoderState::CsiParamSeen)
                }
                _ => Transition::Done(DecodedKey::Ignore),
            },
            DecoderState::CsiParamSeen => Transition::Done(DecodedKey::Ignore),
            DecoderState::CsiDeleteSeen => match byte {
                TILDE_TERMINATOR => done(EditCommand::DeleteForward),
                _ => Transition::Done(DecodedKey::Ignore),
            },
            DecoderState::Ss3Seen => match byte {
                HOME_FINAL => done(EditCommand::MoveHome),
                END_FINAL => done(EditCommand::MoveEnd),
                _ => Transition::Done(DecodedKey::Ignore),
            },
        }
    }
}

fn done(command: EditCommand) -> Transition {
    Transition::Done(DecodedKey::Command(command))
}

fn advance_normal(byte: u8) -> Transition {
    match byte {
        CTRL_A => done(EditCommand::MoveHome),
        CTRL_B => done(EditCommand::MoveLeft),
        CTRL_C => done(EditCommand::Cancel),
        CTRL_D => done(EditCommand::EndOfInput),
        CTRL_E => done(EditCommand::MoveEnd),
        CTRL_F => done(EditCommand::MoveRight),
        CTRL_H | BACKSPACE => done(EditCommand::DeleteBackward),
        TAB => done(EditCommand::Complete),
        CTRL_K => done(EditCommand::KillToEnd),
        CTRL_L => done(EditCommand::ClearScreen),
        ENTER => done(EditCommand::Accept),
        CTRL_N => done(EditCommand::HistoryNext),
        CTRL_P => done(EditCommand::HistoryPrev),
        CTRL_T => done(EditCommand::Transpose),
        CTRL_U => done(EditCommand::ResetLine),
        CTRL_W => done(EditCommand::DeletePrevWord),
        ESC => Transition::Pending(DecoderState::EscSeen),
        0x00..=0x7F => Transition::Done(DecodedKey::Insert(char::from(byte))),
        _ => match utf8_sequence_len(byte) {
            Some(expected) => {
                let mut bytes = [0; UTF8_MAX_LEN];
                bytes[0] = byte;
                Transition::Pending(DecoderState::Utf8Pending {
                    bytes,
                    len: 1,
                    expected,
                })
            }
            None => Transition::Done(DecodedKey::Insert(REPLACEMENT_CHARACTER)),
        },
    }
}

fn advance_utf8(
    mut bytes: [u8; UTF8_MAX_LEN],
    len: usize,
    expected: usize,
    byte: u8,
) -> Transition {
    // Continuation bytes look like 10xxxxxx.
    if byte & 0xC0 != 0x80 {
        return Transition::DoneWithoutConsuming(DecodedKey::Insert(
            REPLACEMENT_CHARACTER,
        ));
    }

    bytes[len] = byte;
    let len = len + 1;
    if len < expected {
        return Transition::Pending(DecoderState::Utf8Pending {
            bytes,
            len,
            expected,
        });
    }

    let ch = std::str::from_utf8(&bytes[..len])
        .ok()
        .and_then(|it| it.chars().next())
        .unwrap_or(REPLACEMENT_CHARACTER);
    Transition::Done(DecodedKey::Insert(ch))
}

/// Total encoded length announced by a UTF-8 lead byte, or [None] if `byte` can't start
/// a sequence (stray continuation byte, overlong `0xC0`/`0xC1`, or `> 0xF4`).
fn utf8_sequence_len(byte: u8) -> Option<usize> {
    match byte {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
