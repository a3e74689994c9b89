// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Dimensions, DimensionsHandle, LineEditor, test_fixtures::FrameRecorderMock};
use std::io::{Cursor, Read, Result};

pub type TestEditor = LineEditor<Cursor<Vec<u8>>, FrameRecorderMock>;

pub const PROMPT: &str = "> ";
pub const BELL_FRAME: &str = "\x07";

/// Editor with a `"> "` prompt reading `input`, and a view of what it flushes.
pub fn editor(input: &[u8]) -> (TestEditor, FrameRecorderMock) {
    let recorder = FrameRecorderMock::new();
    let editor =
        LineEditor::new(Cursor::new(input.to_vec()), recorder.clone()).with_prompt(PROMPT);
    (editor, recorder)
}

/// Single row frame for `buffer` with the cursor in column `cursor_col`.
pub fn frame(buffer: &str, cursor_col: usize) -> String {
    format!("\r{PROMPT}{buffer}\x1b[0K\r\x1b[{cursor_col}C")
}

/// Frames for typing `text` one code point at a time from an empty line, starting with
/// the initial empty frame. Only valid for 1 column wide code points.
pub fn typed(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    (0..=chars.len())
        .map(|count| {
            let prefix: String = chars[..count].iter().collect();
            frame(&prefix, PROMPT.len() + count)
        })
        .collect()
}

/// `typed(text)` followed by `more`.
pub fn typed_then(text: &str, more: &[String]) -> Vec<String> {
    let mut acc = typed(text);
    acc.extend_from_slice(more);
    acc
}

/// Serves one byte per read. Right before the byte at `resize_at` is served, it sets
/// `handle` to `resize_to`, like a transport thread reporting a window change while the
/// user is typing.
#[derive(Debug)]
pub struct ResizingReader {
    data: Vec<u8>,
    position: usize,
    resize_at: usize,
    resize_to: Dimensions,
    handle: DimensionsHandle,
}

impl ResizingReader {
    pub fn new(
        data: &[u8],
        resize_at: usize,
        resize_to: Dimensions,
        handle: DimensionsHandle,
    ) -> Self {
        Self {
            data: data.to_vec(),
            position: 0,
            resize_at,
            resize_to,
            handle,
        }
    }
}

impl Read for ResizingReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let Some(&byte) = self.data.get(self.position) else {
            return Ok(0);
        };
        if buf.is_empty() {
            return Ok(0);
        }
        if self.position == self.resize_at {
            self.handle.set(self.resize_to);
        }
        buf[0] = byte;
        self.position += 1;
        Ok(1)
    }
}
