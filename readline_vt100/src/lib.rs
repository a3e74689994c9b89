// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_readline_vt100
//!
//! A blocking, single-line, readline-style editor that speaks plain VT100 escape
//! sequences over any [`std::io::Read`] + [`std::io::Write`] pair. It does not need a
//! local tty, so it works just as well on a TCP socket, an SSH channel, or a pipe as it
//! does on a real terminal (in raw mode).
//!
//! The pieces, bottom up:
//!
//! | Module            | What it does                                                  |
//! | :---------------- | :------------------------------------------------------------ |
//! | [`key_decoder`]   | Byte-at-a-time FSM that turns input bytes into edit commands  |
//! | [`line_buffer`]   | Editable sequence of code points plus a cursor                |
//! | [`history`]       | Bounded, de-duplicated list of accepted lines                 |
//! | [`completion`]    | Tab-cycling through candidates supplied by a [`Completer`]    |
//! | [`hint`]          | Optional dim text after the line supplied by a [`Hinter`]     |
//! | [`render`]        | Multi-row frame composer for wrapped lines                    |
//! | [`line_editor`]   | Session controller that ties all of the above together        |
//!
//! # Example
//!
//! ```
//! use r3bl_readline_vt100::{LineEditor, ReadlineEvent};
//!
//! let input: &[u8] = b"hello\r";
//! let mut output: Vec<u8> = Vec::new();
//! let mut editor = LineEditor::new(input, &mut output).with_prompt("> ");
//! assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("hello".into()));
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (mostly at `debug` level) and never installs a
//! subscriber on its own. Use [`TracingConfig`] from your binary if you want to see them.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide a flat public API).
pub mod completion;
pub mod core;
pub mod hint;
pub mod history;
pub mod key_decoder;
pub mod line_buffer;
pub mod line_editor;
pub mod render;

// Re-export.
pub use completion::*;
pub use core::*;
pub use hint::*;
pub use history::*;
pub use key_decoder::*;
pub use line_buffer::*;
pub use line_editor::*;
pub use render::*;
