// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::fixtures::{BELL_FRAME, editor, frame};
use crate::ReadlineEvent;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(b"\x10foo\r\x10\x10\x0e\x0ebar\r" ; "ctrl p and ctrl n")]
#[test_case(b"\x1b[Afoo\r\x1b[A\x1b[A\x1b[B\x1b[Bbar\r" ; "arrow up and down")]
fn test_history_browsing_alerts_at_both_ends(input: &[u8]) {
    let (mut editor, recorder) = editor(input);

    // Nothing to go back to yet.
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("foo".into()));
    editor.add_history_entry("foo");

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("bar".into()));

    let expected: Vec<String> = vec![
        // First line.
        frame("", 2),
        BELL_FRAME.into(),
        frame("f", 3),
        frame("fo", 4),
        frame("foo", 5),
        // Second line.
        frame("", 2),
        frame("foo", 5),
        BELL_FRAME.into(),
        frame("", 2),
        BELL_FRAME.into(),
        frame("b", 3),
        frame("ba", 4),
        frame("bar", 5),
    ];
    assert_eq!(recorder.frames(), expected);
}

#[test]
fn test_draft_and_recalled_edits_survive_browsing() {
    // Type a draft, go up, edit the recalled line, go down to the draft and back up.
    let (mut editor, recorder) = editor(b"dr\x10X\x0e\x10\r");
    editor.add_history_entry("old");

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("oldX".into()));
    assert_eq!(
        recorder.frames(),
        vec![
            frame("", 2),
            frame("d", 3),
            frame("dr", 4),
            frame("old", 5),
            frame("oldX", 6),
            frame("dr", 4),
            frame("oldX", 6),
        ]
    );

    // Committed entries are untouched by the edit.
    assert_eq!(editor.history().entries(), ["old"]);
}

#[test]
fn test_recalled_edits_are_dropped_on_next_line() {
    let (mut editor, _recorder) = editor(b"\x10X\r\x10\r");
    editor.add_history_entry("old");

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("oldX".into()));
    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("old".into()));
}

#[test]
fn test_ctrl_u_keeps_history() {
    let (mut editor, _recorder) = editor(b"abc\x15\x10\r");
    editor.add_history_entry("kept");

    assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("kept".into()));
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_history_limit() {
    let (mut editor, _recorder) = editor(b"");
    editor.set_max_history(2);
    for entry in ["a", "b", "b", "c"] {
        editor.add_history_entry(entry);
    }
    assert_eq!(editor.history().entries(), ["b", "c"]);

    editor.history_mut().set_max_size(1);
    assert_eq!(editor.history().entries(), ["c"]);
}
