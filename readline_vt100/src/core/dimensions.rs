// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          sync::{Arc, Mutex as StdMutex, PoisonError}};

/// Terminal width used when none is known.
pub const DEFAULT_COLS: usize = 80;

/// Terminal height used when none is known.
pub const DEFAULT_ROWS: usize = 24;

/// Size of the remote terminal, in display columns and rows. Both are always `> 0`.
///
/// This only changes through an explicit resize notification from the transport
/// ([`DimensionsHandle::set`]) or an interactive query
/// ([`crate::LineEditor::adjust_dimensions`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    cols: usize,
    rows: usize,
}

impl Dimensions {
    /// A `0` for either axis means "unknown" and falls back to [`DEFAULT_COLS`] or
    /// [`DEFAULT_ROWS`].
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: if cols == 0 { DEFAULT_COLS } else { cols },
            rows: if rows == 0 { DEFAULT_ROWS } else { rows },
        }
    }

    #[must_use]
    pub fn cols(&self) -> usize { self.cols }

    #[must_use]
    pub fn rows(&self) -> usize { self.rows }
}

impl Default for Dimensions {
    fn default() -> Self { Self::new(DEFAULT_COLS, DEFAULT_ROWS) }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Shared [`Dimensions`] of one editor. Clones point to the same value, so a transport
/// thread (eg: one handling SSH `window-change` requests) can resize an editor that is
/// blocked inside [`crate::LineEditor::line()`]. Every redraw reads the current value.
#[derive(Clone, Debug, Default)]
pub struct DimensionsHandle {
    inner: Arc<StdMutex<Dimensions>>,
}

impl DimensionsHandle {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            inner: Arc::new(StdMutex::new(dimensions)),
        }
    }

    #[must_use]
    pub fn get(&self) -> Dimensions {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes effect on the next redraw of every editor sharing this handle.
    pub fn set(&self, dimensions: Dimensions) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = dimensions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_80_by_24() {
        let it = Dimensions::default();
        assert_eq!((it.cols(), it.rows()), (80, 24));
        assert_eq!(it.to_string(), "80x24");
    }

    #[test]
    fn test_zero_falls_back_per_axis() {
        assert_eq!(Dimensions::new(0, 10), Dimensions::new(80, 10));
        assert_eq!(Dimensions::new(120, 0), Dimensions::new(120, 24));
    }

    #[test]
    fn test_handle_clones_share_value() {
        let handle = DimensionsHandle::new(Dimensions::new(100, 30));
        let handle_clone = handle.clone();
        assert_eq!(handle_clone.get(), Dimensions::new(100, 30));

        let other_thread = std::thread::spawn(move || {
            handle_clone.set(Dimensions::new(40, 10));
        });
        other_thread.join().unwrap();

        assert_eq!(handle.get(), Dimensions::new(40, 10));
    }
}
