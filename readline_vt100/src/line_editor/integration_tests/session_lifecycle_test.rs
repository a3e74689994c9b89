// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::fixtures::{PROMPT, ResizingReader, editor, frame, typed, typed_then};
use crate::{DecoderState, Dimensions, DimensionsHandle, LineEditor, LineEditorConfig, ReadlineError,
            ReadlineEvent,
            test_fixtures::{FailingReader, FailingWriter, FrameRecorderMock, StdoutMock},
            unicode_char_width};
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[test]
fn test_ctrl_c_interrupts_with_partial_line() {
    let (mut editor, recorder) = editor(b"foo b\x03");
    assert_eq!(
        editor.line().unwrap(),
        ReadlineEvent::Interrupted("foo b".into())
    );
    assert_eq!(recorder.frames(), typed("foo b"));
}

#[test]
fn test_ctrl_d_on_empty_line_is_eof() {
    let (mut editor, recorder) = editor(b"\x04");
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Eof);
    assert_eq!(recorder.frames(), vec![frame("", 2)]);
}

#[test]
fn test_one_frame_per_key_plus_initial() {
    let (mut editor, recorder) = editor(b"abc\r");
    let _ = editor.line().unwrap();
    assert_eq!(recorder.frames().len(), 4);
}

#[test]
fn test_insert_delete_insert_redraws_three_times() {
    let (mut editor, recorder) = editor(b"x\x7fx\r");
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("x".into()));

    // Initial frame, then one redraw per edit. Accept adds none.
    assert_eq!(
        recorder.frames(),
        vec![frame("", 2), frame("x", 3), frame("", 2), frame("x", 3)]
    );
}

#[test]
fn test_each_line_starts_fresh() {
    let (mut editor, recorder) = editor(b"one\rtwo\r");
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("one".into()));
    assert_eq!(editor.buffer(), "one");
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("two".into()));

    let mut expected = typed("one");
    expected.extend(typed("two"));
    assert_eq!(recorder.frames(), expected);
}

#[test]
fn test_input_closed_between_keys() {
    let (mut editor, _recorder) = editor(b"ab");
    let err = editor.line().unwrap_err();
    assert!(matches!(err, ReadlineError::ChannelClosed));
    assert!(err.is_channel_error());
}

#[test]
fn test_input_closed_inside_sequence() {
    let (mut editor, _recorder) = editor(b"ab\x1b[");
    assert!(matches!(
        editor.line(),
        Err(ReadlineError::TruncatedSequence {
            pending_state: DecoderState::CsiSeen
        })
    ));
}

#[test]
fn test_read_failure() {
    let mut editor = LineEditor::new(FailingReader, StdoutMock::new());
    assert!(matches!(editor.line(), Err(ReadlineError::ChannelIo(_))));
}

#[test]
fn test_write_failure() {
    let mut editor = LineEditor::new(Cursor::new(b"a\r".to_vec()), FailingWriter);
    assert!(matches!(editor.line(), Err(ReadlineError::ChannelIo(_))));
}

#[test]
fn test_row_wrap_and_unwrap() {
    let (editor, recorder) = editor(b"12345678\x7f\r");
    let mut editor = editor.with_dimensions(Dimensions::new(10, 24));

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("1234567".into()));
    assert_eq!(
        recorder.frames(),
        typed_then(
            "1234567",
            &[
                "\r> 12345678\x1b[0K\n\r\r".into(),
                "\x1b[2K\x1b[1A\r> 1234567\x1b[0K\r\x1b[9C".into(),
            ]
        )
    );
}

#[test]
fn test_resize_between_lines() {
    let (mut editor, recorder) = editor(b"\r123456789\x01\r");
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line(String::new()));

    editor.set_dimensions(Dimensions::new(10, 5));
    assert_eq!(editor.dimensions(), Dimensions::new(10, 5));
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("123456789".into()));

    // 11 columns wrap onto a second row, home goes up one row.
    assert_eq!(
        recorder.frames().last().unwrap(),
        "\x1b[2K\x1b[1A\r> 123456789\x1b[0K\x1b[1A\r\x1b[2C"
    );
}

#[test]
fn test_resize_in_the_middle_of_a_line() {
    let handle = DimensionsHandle::default();
    let reader =
        ResizingReader::new(b"12345678\r", 7, Dimensions::new(10, 24), handle.clone());
    let recorder = FrameRecorderMock::new();
    let mut editor = LineEditor::new(reader, recorder.clone())
        .with_prompt(PROMPT)
        .with_dimensions_handle(handle);

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("12345678".into()));
    assert_eq!(editor.dimensions(), Dimensions::new(10, 24));

    // The 8th code point is drawn at the new width, filling the row exactly.
    assert_eq!(
        recorder.frames(),
        typed_then("1234567", &["\r> 12345678\x1b[0K\n\r\r".into()])
    );
}

#[test]
fn test_dimensions_handle_is_shared_with_editor() {
    let (editor, _recorder) = editor(b"");
    let handle = editor.dimensions_handle();
    handle.set(Dimensions::new(50, 20));
    assert_eq!(editor.dimensions(), Dimensions::new(50, 20));

    editor.set_dimensions(Dimensions::new(0, 0));
    assert_eq!(handle.get(), Dimensions::default());
}

#[test]
fn test_wide_chars_with_unicode_width() {
    let (editor, recorder) = editor("日本\r".as_bytes());
    let mut editor = editor.with_width_fn(unicode_char_width);

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("日本".into()));
    assert_eq!(
        recorder.frames(),
        vec![frame("", 2), frame("日", 4), frame("日本", 6)]
    );
}

#[test]
fn test_styled_prompt_width_ignores_escapes() {
    let recorder = crate::test_fixtures::FrameRecorderMock::new();
    let config = LineEditorConfig {
        prompt: "\x1b[32m$\x1b[0m ".into(),
        ..Default::default()
    };
    let mut editor =
        LineEditor::with_config(Cursor::new(b"x\r".to_vec()), recorder.clone(), config);

    assert_eq!(editor.prompt(), "\x1b[32m$\x1b[0m ");
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("x".into()));
    assert_eq!(
        recorder.frames().last().unwrap(),
        "\r\x1b[32m$\x1b[0m x\x1b[0K\r\x1b[3C"
    );
}

#[test]
fn test_set_prompt_applies_to_next_line() {
    let (mut editor, recorder) = editor(b"\r\r");
    let _ = editor.line().unwrap();
    editor.set_prompt("# ");
    let _ = editor.line().unwrap();
    assert_eq!(recorder.frames().last().unwrap(), "\r# \x1b[0K\r\x1b[2C");
}

#[test]
fn test_output_between_lines() {
    use std::io::Write as _;

    let stdout_mock = StdoutMock::new();
    let mut editor = LineEditor::new(Cursor::new(b"hi\r".to_vec()), stdout_mock.clone());
    let ReadlineEvent::Line(line) = editor.line().unwrap() else {
        panic!("expected a line");
    };
    writeln!(editor.output_mut(), "\r\nyou have typed: {line}\r").unwrap();

    assert!(
        stdout_mock
            .get_copy_of_buffer_as_string()
            .ends_with("\x1b[0K\r\x1b[2C\r\nyou have typed: hi\r\n")
    );
}
