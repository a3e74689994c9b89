// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Result of an edit on a [`LineBuffer`].
///
/// [`EditOutcome::Alert`] means the edit hit a boundary and nothing changed. The caller
/// rings the bell instead of redrawing.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    Alert,
}

impl EditOutcome {
    fn alert_if(condition: bool) -> Self {
        if condition {
            EditOutcome::Alert
        } else {
            EditOutcome::Changed
        }
    }
}

/// Word separator used by [`LineBuffer::delete_prev_word`].
const WORD_SEPARATOR: char = ' ';

/// The line being edited, stored as code points, with a cursor that is a code point
/// offset in `0..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn chars(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    #[must_use]
    pub fn as_string(&self) -> String { self.chars.iter().collect() }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Replace the whole content, the cursor goes to the end.
    pub fn replace_with(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    pub fn insert(&mut self, ch: char) -> EditOutcome {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        EditOutcome::Changed
    }

    pub fn delete_backward(&mut self) -> EditOutcome {
        if self.cursor == 0 {
            return EditOutcome::Alert;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        EditOutcome::Changed
    }

    pub fn delete_forward(&mut self) -> EditOutcome {
        if self.cursor == self.chars.len() {
            return EditOutcome::Alert;
        }
        self.chars.remove(self.cursor);
        EditOutcome::Changed
    }

    /// Swap the code point before the cursor with the one under it. At the end of the
    /// line the last two code points are swapped instead.
    pub fn transpose(&mut self) -> EditOutcome {
        let len = self.chars.len();
        if len < 2 {
            return EditOutcome::Alert;
        }
        let pos = self.cursor.min(len - 1);
        if pos == 0 {
            return EditOutcome::Alert;
        }
        self.chars.swap(pos - 1, pos);
        if self.cursor < len {
            self.cursor += 1;
        }
        EditOutcome::Changed
    }

    pub fn move_left(&mut self) -> EditOutcome {
        let outcome = EditOutcome::alert_if(self.cursor == 0);
        if outcome == EditOutcome::Changed {
            self.cursor -= 1;
        }
        outcome
    }

    pub fn move_right(&mut self) -> EditOutcome {
        let outcome = EditOutcome::alert_if(self.cursor == self.chars.len());
        if outcome == EditOutcome::Changed {
            self.cursor += 1;
        }
        outcome
    }

    pub fn move_home(&mut self) -> EditOutcome {
        let outcome = EditOutcome::alert_if(self.cursor == 0);
        self.cursor = 0;
        outcome
    }

    pub fn move_end(&mut self) -> EditOutcome {
        let outcome = EditOutcome::alert_if(self.cursor == self.chars.len());
        self.cursor = self.chars.len();
        outcome
    }

    pub fn kill_to_end(&mut self) -> EditOutcome {
        self.chars.truncate(self.cursor);
        EditOutcome::Changed
    }

    /// Scan back from the cursor over trailing separators and then over the word before
    /// them. Everything from that boundary onward is dropped, including text after the
    /// cursor.
    pub fn delete_prev_word(&mut self) -> EditOutcome {
        let before_cursor = &self.chars[..self.cursor];
        let boundary = before_cursor
            .iter()
            .rposition(|&ch| ch != WORD_SEPARATOR)
            .map_or(0, |last_word_char| {
                before_cursor[..=last_word_char]
                    .iter()
                    .rposition(|&ch| ch == WORD_SEPARATOR)
                    .map_or(0, |separator| separator + 1)
            });
        self.chars.truncate(boundary);
        self.cursor = boundary;
        EditOutcome::Changed
    }
}

impl std::fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
