// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BoxedCompleter, BoxedHinter, Completer, Dimensions, DimensionsHandle,
            HistoryStore, Hinter, KeyDecoder, LineBuffer, LineEditorConfig, ReadlineError, ReadlineEvent,
            RenderState, WidthFn, default_char_width};
use std::{fmt::{Debug, Formatter, Result as FmtResult},
          io::{Read, Write}};

/// # Mental model and overview
///
/// A blocking replacement for [`std::io::BufRead::read_line`] that works over any byte
/// channel, eg: a TCP socket whose other end is a terminal in raw mode. The editor
/// never touches a local tty. It reads raw key bytes from `R` and paints an in-place
/// editing UI on the remote terminal by writing VT100 escape sequences to `W`.
///
/// Each call to [`Self::line()`] starts with an empty buffer and runs until the user
/// presses <kbd>Enter</kbd>, <kbd>Ctrl+C</kbd>, or <kbd>Ctrl+D</kbd> on an empty line.
/// The [`HistoryStore`] outlives these calls, everything else is reset.
///
/// ```
/// use r3bl_readline_vt100::{LineEditor, ReadlineEvent};
///
/// let input: &[u8] = b"hello\r";
/// let mut editor = LineEditor::new(input, Vec::new()).with_prompt("> ");
/// assert_eq!(editor.line().unwrap(), ReadlineEvent::Line("hello".into()));
/// ```
///
/// Every redraw is written and then flushed once. A boundary violation (eg: backspace
/// at the start of the line) rings the bell instead of redrawing.
pub struct LineEditor<R: Read, W: Write> {
    pub(crate) decoder: KeyDecoder<R>,
    pub(crate) output: W,
    pub(crate) config: LineEditorConfig,
    pub(crate) dimensions: DimensionsHandle,
    pub(crate) buffer: LineBuffer,
    pub(crate) render_state: RenderState,
    pub(crate) history: HistoryStore,
    pub(crate) maybe_completer: Option<BoxedCompleter>,
    pub(crate) maybe_hinter: Option<BoxedHinter>,
    pub(crate) width_fn: WidthFn,
}

impl<R: Read, W: Write> Debug for LineEditor<R, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LineEditor")
            .field("config", &self.config)
            .field("dimensions", &self.dimensions.get())
            .field("buffer", &self.buffer)
            .field("render_state", &self.render_state)
            .field("history_len", &self.history.len())
            .field("has_completer", &self.maybe_completer.is_some())
            .field("has_hinter", &self.maybe_hinter.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: Read, W: Write> LineEditor<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, LineEditorConfig::default())
    }

    pub fn with_config(reader: R, writer: W, config: LineEditorConfig) -> Self {
        Self {
            decoder: KeyDecoder::new(reader),
            output: writer,
            history: HistoryStore::with_max_size(config.history_max_size),
            dimensions: DimensionsHandle::new(config.dimensions),
            config,
            buffer: LineBuffer::new(),
            render_state: RenderState::default(),
            maybe_completer: None,
            maybe_hinter: None,
            width_fn: Box::new(default_char_width),
        }
    }

    /// Without a completer, <kbd>Tab</kbd> inserts a literal tab.
    #[must_use]
    pub fn with_completer(mut self, completer: impl Completer + Send + 'static) -> Self {
        self.maybe_completer = Some(Box::new(completer));
        self
    }

    #[must_use]
    pub fn with_hinter(mut self, hinter: impl Hinter + Send + 'static) -> Self {
        self.maybe_hinter = Some(Box::new(hinter));
        self
    }

    /// Replace [`default_char_width`], eg: with [`crate::unicode_char_width`].
    #[must_use]
    pub fn with_width_fn(
        mut self,
        width_fn: impl Fn(char) -> usize + Send + 'static,
    ) -> Self {
        self.width_fn = Box::new(width_fn);
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.config.dimensions = dimensions;
        self.dimensions.set(dimensions);
        self
    }

    /// Share `handle` with the caller, eg: to create it before the editor and hand a
    /// clone to the transport. The handle's current value replaces the configured one.
    #[must_use]
    pub fn with_dimensions_handle(mut self, handle: DimensionsHandle) -> Self {
        self.dimensions = handle;
        self
    }

    /// Read one line. See [`ReadlineEvent`] for the ways this can end normally.
    ///
    /// # Errors
    ///
    /// Returns a channel error ([`ReadlineError::is_channel_error`]) if the input or
    /// output channel fails or closes. The session can't continue after that.
    pub fn line(&mut self) -> Result<ReadlineEvent, ReadlineError> {
        self.buffer.clear();
        self.render_state.reset();
        self.history.begin_browse();

        tracing::debug!(
            message = "line session started",
            prompt = ?self.config.prompt,
            dimensions = %self.dimensions.get(),
            history_len = self.history.len()
        );

        self.refresh()?;

        loop {
            let key = self.decoder.read_key()?;
            tracing::trace!(message = "key decoded", ?key);
            if let Some(event) = self.apply_key(key)? {
                tracing::debug!(message = "line session ended", ?event);
                return Ok(event);
            }
        }
    }

    /// Call this when the transport reports a resize (eg: an SSH `window-change`
    /// request). Takes effect on the next redraw. A `0` falls back to the default.
    /// Use [`Self::dimensions_handle()`] to resize while [`Self::line()`] is running.
    pub fn set_dimensions(&self, dimensions: Dimensions) {
        self.dimensions.set(dimensions);
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions { self.dimensions.get() }

    /// A clone of the shared dimensions. Setting it from another thread resizes this
    /// editor from its next redraw on, even in the middle of a line.
    #[must_use]
    pub fn dimensions_handle(&self) -> DimensionsHandle { self.dimensions.clone() }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.config.prompt }

    /// Takes effect on the next [`Self::line()`] call.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.config.prompt = prompt.into();
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore { &self.history }

    /// Seed or trim the history between lines.
    pub fn history_mut(&mut self) -> &mut HistoryStore { &mut self.history }

    /// Shorthand for `history_mut().add(entry)`.
    pub fn add_history_entry(&mut self, entry: impl Into<String>) {
        self.history.add(entry);
    }

    /// Change the history limit, dropping the oldest entries if needed.
    pub fn set_max_history(&mut self, max_size: usize) {
        self.config.history_max_size = max_size;
        self.history.set_max_size(max_size);
    }

    /// Text of the line being edited, or of the last line once [`Self::line()`] has
    /// returned.
    #[must_use]
    pub fn buffer(&self) -> String { self.buffer.as_string() }

    /// The output channel, eg: to print a response between two [`Self::line()`] calls.
    pub fn output_mut(&mut self) -> &mut W { &mut self.output }
}
