// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HISTORY_SIZE_MAX;

/// Committed lines plus the browse state of the line being edited.
///
/// While browsing, the store works on a copy of the entries with one extra slot at the
/// end for the line being typed (the draft). Edits to a recalled entry are kept in that
/// copy until the next [`HistoryStore::begin_browse`] or [`HistoryStore::add`], so the
/// committed entries never change by browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    max_size: usize,
    browse: Vec<String>,
    position: usize,
}

impl Default for HistoryStore {
    fn default() -> Self { Self::with_max_size(HISTORY_SIZE_MAX) }
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        let mut it = Self {
            entries: vec![],
            max_size,
            browse: vec![],
            position: 0,
        };
        it.begin_browse();
        it
    }

    /// Commit a line. Empty lines and repeats of the newest entry are skipped.
    pub fn add(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.is_empty() || self.entries.last() == Some(&line) {
            return;
        }
        self.entries.push(line);
        self.enforce_max_size();
        self.begin_browse();
    }

    /// Start browsing from a fresh, empty draft slot.
    pub fn begin_browse(&mut self) {
        self.browse.clone_from(&self.entries);
        self.browse.push(String::new());
        self.position = self.browse.len() - 1;
    }

    /// Move one entry back (older). `current` is the text being edited, it is kept in
    /// the slot being left. Returns [None] if there is no older entry.
    pub fn prev(&mut self, current: &str) -> Option<&str> {
        if self.position == 0 {
            return None;
        }
        self.store_current(current);
        self.position -= 1;
        Some(self.get())
    }

    /// Move one entry forward (newer). Returns [None] when already on the draft slot.
    pub fn next(&mut self, current: &str) -> Option<&str> {
        if self.position + 1 >= self.browse.len() {
            return None;
        }
        self.store_current(current);
        self.position += 1;
        Some(self.get())
    }

    /// Text at the browse position.
    #[must_use]
    pub fn get(&self) -> &str {
        self.browse.get(self.position).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn entries(&self) -> &[String] { &self.entries }

    #[must_use]
    pub fn max_size(&self) -> usize { self.max_size }

    /// Change the limit. Oldest entries are dropped if there are now too many.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        if self.enforce_max_size() {
            self.begin_browse();
        }
    }

    fn store_current(&mut self, current: &str) {
        if let Some(slot) = self.browse.get_mut(self.position) {
            current.clone_into(slot);
        }
    }

    fn enforce_max_size(&mut self) -> bool {
        let excess = self.entries.len().saturating_sub(self.max_size);
        if excess > 0 {
            self.entries.drain(..excess);
        }
        excess > 0
    }
}
