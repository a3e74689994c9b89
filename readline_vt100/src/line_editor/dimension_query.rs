// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Dimensions, LineEditor, QUERY_DIMENSIONS, RESTORE_CURSOR, ReadlineError};
use nom::{IResult, Parser,
          bytes::complete::tag,
          character::complete::{char, digit1},
          combinator::map_res};
use std::io::{Read, Write};

/// Start of the cursor position report, `ESC [`.
const REPORT_PREFIX: &str = "\x1b[";

impl<R: Read, W: Write> LineEditor<R, W> {
    /// Ask the terminal how big it is. The cursor is parked in the far bottom right
    /// corner, its position is requested (DSR 6), and then it is put back.
    ///
    /// Call this between [`Self::line()`] calls. It reads from the same channel as the
    /// editor, so it would swallow keystrokes typed during the query.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::MalformedCursorReport`] if the reply can't be parsed. The old
    ///   dimensions are kept, this is safe to ignore.
    /// - A channel error if the query can't be written or the reply can't be read.
    pub fn adjust_dimensions(&mut self) -> Result<Dimensions, ReadlineError> {
        self.output.write_all(QUERY_DIMENSIONS.as_bytes())?;
        self.output.flush()?;

        let response = self.decoder.read_until(b'R')?;

        self.output.write_all(RESTORE_CURSOR.as_bytes())?;
        self.output.flush()?;

        if response.is_empty() {
            return Err(ReadlineError::ChannelClosed);
        }

        let response = String::from_utf8_lossy(&response);
        let (rows, cols) = parse_cursor_position_report(&response).ok_or_else(|| {
            ReadlineError::MalformedCursorReport {
                response: response.to_string(),
            }
        })?;

        let dimensions = Dimensions::new(cols, rows);
        self.dimensions.set(dimensions);
        tracing::debug!(message = "dimensions adjusted", %dimensions);
        Ok(dimensions)
    }
}

/// Parse `... ESC [ <row> ; <col> R` into `(row, col)`. Anything before the last
/// `ESC [` is skipped (eg: keys the user typed while the query was in flight). Rows and
/// columns of `0` are rejected.
#[must_use]
pub fn parse_cursor_position_report(input: &str) -> Option<(usize, usize)> {
    let start = input.rfind(REPORT_PREFIX)?;
    let (_, (row, col)) = cursor_position_report_parser(&input[start..]).ok()?;
    (row > 0 && col > 0).then_some((row, col))
}

fn cursor_position_report_parser(input: &str) -> IResult<&str, (usize, usize)> {
    (
        tag(REPORT_PREFIX),
        map_res(digit1, str::parse),
        char(';'),
        map_res(digit1, str::parse),
        char('R'),
    )
        .parse(input)
        .map(|(remaining, (_, row, _, col, _))| (remaining, (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::StdoutMock;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("\x1b[24;80R", Some((24, 80)) ; "plain")]
    #[test_case("ab\x1b[51;132R", Some((51, 132)) ; "typed keys before report")]
    #[test_case("\x1b[A\x1b[5;7R", Some((5, 7)) ; "uses last escape")]
    #[test_case("\x1b[24R", None ; "missing column")]
    #[test_case("\x1b[0;80R", None ; "zero row")]
    #[test_case("\x1b[24;99999999999999999999999R", None ; "overflow")]
    #[test_case("garbage R", None ; "no escape")]
    fn test_parse_cursor_position_report(input: &str, expected: Option<(usize, usize)>) {
        assert_eq!(parse_cursor_position_report(input), expected);
    }

    #[test]
    fn test_adjust_dimensions_updates_and_restores_cursor() {
        let stdout_mock = StdoutMock::new();
        let input: &[u8] = b"\x1b[51;132R";
        let mut editor = LineEditor::new(input, stdout_mock.clone());

        let dimensions = editor.adjust_dimensions().unwrap();

        assert_eq!(dimensions, Dimensions::new(132, 51));
        assert_eq!(editor.dimensions(), dimensions);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b7\x1b[999;999H\x1b[6n\x1b8"
        );
    }

    #[test]
    fn test_adjust_dimensions_malformed_keeps_old_dimensions() {
        let stdout_mock = StdoutMock::new();
        let input: &[u8] = b"\x1b[oopsR";
        let mut editor = LineEditor::new(input, stdout_mock.clone());

        let err = editor.adjust_dimensions().unwrap_err();

        assert!(err.is_protocol_error());
        assert_eq!(editor.dimensions(), Dimensions::default());
        assert!(stdout_mock.get_copy_of_buffer_as_string().ends_with("\x1b8"));
    }

    #[test]
    fn test_adjust_dimensions_closed_channel() {
        let input: &[u8] = b"";
        let mut editor = LineEditor::new(input, StdoutMock::new());
        assert!(matches!(
            editor.adjust_dimensions(),
            Err(ReadlineError::ChannelClosed)
        ));
    }
}
