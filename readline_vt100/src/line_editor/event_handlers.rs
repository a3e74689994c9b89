// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BELL, CLEAR_SCREEN, CompletionCycle, DecodedKey, ESC, EditCommand,
            EditOutcome, LineEditor, ReadlineError, ReadlineEvent, RenderInput, TAB,
            compose_frame};
use std::io::{Read, Write};

impl<R: Read, W: Write> LineEditor<R, W> {
    /// Apply one decoded key. Returns `Some` when the line session is over.
    ///
    /// # Errors
    ///
    /// If writing a frame fails, or the input channel fails during completion.
    pub fn apply_key(
        &mut self,
        key: DecodedKey,
    ) -> Result<Option<ReadlineEvent>, ReadlineError> {
        match key {
            DecodedKey::Ignore => Ok(None),
            DecodedKey::Insert(ch) => {
                let outcome = self.buffer.insert(ch);
                self.handle_outcome(outcome)?;
                Ok(None)
            }
            DecodedKey::Command(command) => self.apply_command(command),
        }
    }

    fn apply_command(
        &mut self,
        command: EditCommand,
    ) -> Result<Option<ReadlineEvent>, ReadlineError> {
        let outcome = match command {
            EditCommand::Accept => {
                return Ok(Some(ReadlineEvent::Line(self.buffer.as_string())));
            }
            EditCommand::Cancel => {
                return Ok(Some(ReadlineEvent::Interrupted(self.buffer.as_string())));
            }
            EditCommand::EndOfInput => {
                if self.buffer.is_empty() {
                    return Ok(Some(ReadlineEvent::Eof));
                }
                self.buffer.delete_forward()
            }
            EditCommand::MoveLeft => self.buffer.move_left(),
            EditCommand::MoveRight => self.buffer.move_right(),
            EditCommand::MoveHome => self.buffer.move_home(),
            EditCommand::MoveEnd => self.buffer.move_end(),
            EditCommand::DeleteBackward => self.buffer.delete_backward(),
            EditCommand::DeleteForward => self.buffer.delete_forward(),
            EditCommand::KillToEnd => self.buffer.kill_to_end(),
            EditCommand::DeletePrevWord => self.buffer.delete_prev_word(),
            EditCommand::Transpose => self.buffer.transpose(),
            EditCommand::HistoryPrev => {
                let current = self.buffer.as_string();
                match self.history.prev(&current) {
                    Some(text) => {
                        self.buffer.replace_with(text);
                        EditOutcome::Changed
                    }
                    None => EditOutcome::Alert,
                }
            }
            EditCommand::HistoryNext => {
                let current = self.buffer.as_string();
                match self.history.next(&current) {
                    Some(text) => {
                        self.buffer.replace_with(text);
                        EditOutcome::Changed
                    }
                    None => EditOutcome::Alert,
                }
            }
            EditCommand::ResetLine => {
                self.buffer.clear();
                EditOutcome::Changed
            }
            EditCommand::ClearScreen => {
                // The old frame is gone with the rest of the screen.
                self.render_state.reset();
                self.write_frame_for_buffer(CLEAR_SCREEN)?;
                return Ok(None);
            }
            EditCommand::Complete => {
                self.complete_line()?;
                return Ok(None);
            }
        };

        self.handle_outcome(outcome)?;
        Ok(None)
    }

    fn handle_outcome(&mut self, outcome: EditOutcome) -> Result<(), ReadlineError> {
        match outcome {
            EditOutcome::Changed => self.refresh(),
            EditOutcome::Alert => self.alert(),
        }
    }

    /// Ring the terminal bell.
    pub(crate) fn alert(&mut self) -> Result<(), ReadlineError> {
        self.output.write_all(BELL.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Redraw the prompt and buffer.
    pub(crate) fn refresh(&mut self) -> Result<(), ReadlineError> {
        self.write_frame_for_buffer("")
    }

    fn write_frame_for_buffer(&mut self, prefix: &str) -> Result<(), ReadlineError> {
        let text = self.buffer.as_string();
        let maybe_hint = self.maybe_hinter.as_ref().and_then(|it| it.hint(&text));
        let input = RenderInput {
            prompt: &self.config.prompt,
            buffer: self.buffer.chars(),
            cursor: self.buffer.cursor(),
            hint: maybe_hint.as_ref(),
        };
        let frame = compose_frame(
            &mut self.render_state,
            &input,
            self.dimensions.get(),
            &self.width_fn,
        );
        write_and_flush(&mut self.output, &format!("{prefix}{frame}"))
    }

    /// Draw `choice` as if it were the buffer, with the cursor at the end, without
    /// changing the buffer.
    fn refresh_preview(&mut self, choice: &str) -> Result<(), ReadlineError> {
        let chars: Vec<char> = choice.chars().collect();
        let maybe_hint = self.maybe_hinter.as_ref().and_then(|it| it.hint(choice));
        let input = RenderInput {
            prompt: &self.config.prompt,
            buffer: &chars,
            cursor: chars.len(),
            hint: maybe_hint.as_ref(),
        };
        let frame = compose_frame(
            &mut self.render_state,
            &input,
            self.dimensions.get(),
            &self.width_fn,
        );
        write_and_flush(&mut self.output, &frame)
    }

    /// Cycle through completion candidates until a byte other than <kbd>Tab</kbd>
    /// arrives. <kbd>Esc</kbd> goes back to the original line. Any other byte keeps the
    /// candidate on screen and is left unread for the main loop.
    fn complete_line(&mut self) -> Result<(), ReadlineError> {
        let Some(completer) = self.maybe_completer.as_ref() else {
            let outcome = self.buffer.insert('\t');
            return self.handle_outcome(outcome);
        };

        let original = self.buffer.as_string();
        let Some(mut cycle) = CompletionCycle::new(completer.complete(&original), original)
        else {
            return self.alert();
        };

        tracing::debug!(
            message = "completion started",
            candidates = cycle.candidate_count()
        );

        loop {
            self.refresh_preview(cycle.current())?;

            match self.decoder.peek_byte()? {
                Some(TAB) => {
                    self.decoder.consume_byte();
                    cycle.advance();
                }
                Some(ESC) => {
                    self.decoder.consume_byte();
                    return self.refresh();
                }
                // End of stream is reported by the next read in the main loop.
                Some(_) | None => {
                    self.buffer.replace_with(cycle.current());
                    return Ok(());
                }
            }
        }
    }
}

/// One write and one flush per frame.
fn write_and_flush(output: &mut impl Write, frame: &str) -> Result<(), ReadlineError> {
    output.write_all(frame.as_bytes())?;
    output.flush()?;
    Ok(())
}
