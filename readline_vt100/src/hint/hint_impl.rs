// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};
use strum_macros::EnumIter;

/// Foreground colors a [`Hint`] can use. The discriminant is the SGR parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, EnumIter)]
#[repr(u8)]
pub enum HintColor {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    #[default]
    White = 37,
}

impl HintColor {
    #[must_use]
    pub fn sgr_code(self) -> u8 { self as u8 }
}

/// Text shown after the buffer as a suggestion. It is not part of the line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hint {
    pub message: String,
    pub color: HintColor,
    pub bold: bool,
}

impl Hint {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn color(mut self, color: HintColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Message wrapped in SGR sequences: `ESC [ <0|1> ; <color> ; 49 m <msg> ESC [ 0 m`.
    #[must_use]
    pub fn styled(&self) -> String { self.to_string() }
}

impl Display for Hint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "\x1b[{};{};49m{}\x1b[0m",
            u8::from(self.bold),
            self.color.sgr_code(),
            self.message
        )
    }
}

/// Computes a [`Hint`] for the current line on every redraw.
pub trait Hinter {
    fn hint(&self, line: &str) -> Option<Hint>;
}

impl<F> Hinter for F
where
    F: Fn(&str) -> Option<Hint>,
{
    fn hint(&self, line: &str) -> Option<Hint> { self(line) }
}

pub type BoxedHinter = Box<dyn Hinter + Send>;
