// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DecoderState;
use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Outcome of one [`crate::LineEditor::line()`] call that did not fail.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ReadlineEvent {
    /// The user pressed `Enter`. Contains the confirmed line, without any prompt.
    Line(String),

    /// The user pressed `Ctrl+D` on an empty line.
    Eof,

    /// The user pressed `Ctrl+C`. Contains whatever was typed so far, so the caller can
    /// decide whether to retry with it.
    Interrupted(String),
}

/// Error returned from [`crate::LineEditor::line()`] and
/// [`crate::LineEditor::adjust_dimensions()`].
///
/// - Channel errors ([`Self::is_channel_error`]) are fatal to the session, the byte
///   channel is broken or gone.
/// - Protocol errors ([`Self::is_protocol_error`]) are recoverable, the caller can keep
///   the dimensions it already had.
///
/// Edit boundary violations (eg: backspace at the start of the line) are never errors,
/// they ring the terminal bell instead.
#[derive(Debug, Error, Diagnostic)]
pub enum ReadlineError {
    /// Reading from or writing to the underlying byte channel failed.
    #[error("I/O error on the terminal byte channel")]
    #[diagnostic(code(r3bl_readline_vt100::channel_io))]
    ChannelIo(#[from] io::Error),

    /// The input channel reached end of stream between two keys.
    #[error("input channel closed")]
    #[diagnostic(
        code(r3bl_readline_vt100::channel_closed),
        help("The peer hung up or the transport closed the input side")
    )]
    ChannelClosed,

    /// The input channel reached end of stream in the middle of a multi byte key.
    #[error("input channel closed in the middle of a key sequence ({pending_state})")]
    #[diagnostic(code(r3bl_readline_vt100::truncated_sequence))]
    TruncatedSequence { pending_state: DecoderState },

    /// The reply to the dimension query was not `ESC [ <row> ; <col> R`.
    #[error("malformed cursor position report: {response:?}")]
    #[diagnostic(
        code(r3bl_readline_vt100::malformed_cursor_report),
        help("The terminal may not support DSR 6; keep the previous dimensions")
    )]
    MalformedCursorReport { response: String },
}

impl ReadlineError {
    #[must_use]
    pub fn is_channel_error(&self) -> bool {
        matches!(
            self,
            ReadlineError::ChannelIo(_)
                | ReadlineError::ChannelClosed
                | ReadlineError::TruncatedSequence { .. }
        )
    }

    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, ReadlineError::MalformedCursorReport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_classification() {
        let io_err = ReadlineError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(io_err.is_channel_error());
        assert!(ReadlineError::ChannelClosed.is_channel_error());
        assert!(
            ReadlineError::TruncatedSequence {
                pending_state: DecoderState::CsiSeen
            }
            .is_channel_error()
        );

        let protocol_err = ReadlineError::MalformedCursorReport {
            response: "garbage".into(),
        };
        assert!(protocol_err.is_protocol_error());
        assert!(!protocol_err.is_channel_error());
    }

    #[test]
    fn test_truncated_sequence_message_names_state() {
        let it = ReadlineError::TruncatedSequence {
            pending_state: DecoderState::EscSeen,
        };
        assert_eq!(
            it.to_string(),
            "input channel closed in the middle of a key sequence (EscSeen)"
        );
    }
}
