// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Supplies completion candidates for the current line. Each candidate replaces the
/// whole line when it is shown.
pub trait Completer {
    fn complete(&self, line: &str) -> Vec<String>;
}

impl<F> Completer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn complete(&self, line: &str) -> Vec<String> { self(line) }
}

pub type BoxedCompleter = Box<dyn Completer + Send>;

/// Cycles through the candidates, then back to the text typed before completion
/// started, then around again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCycle {
    choices: Vec<String>,
    index: usize,
}

impl CompletionCycle {
    /// Returns [None] if there are no candidates, the caller alerts.
    #[must_use]
    pub fn new(candidates: Vec<String>, original: impl Into<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        let mut choices = candidates;
        choices.push(original.into());
        Some(Self { choices, index: 0 })
    }

    #[must_use]
    pub fn current(&self) -> &str { &self.choices[self.index] }

    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.choices.len();
        self.current()
    }

    /// The line as it was when completion started.
    #[must_use]
    pub fn original(&self) -> &str { self.choices.last().map_or("", String::as_str) }

    /// Number of real candidates, not counting the original line.
    #[must_use]
    pub fn candidate_count(&self) -> usize { self.choices.len() - 1 }

    #[must_use]
    pub fn is_showing_original(&self) -> bool { self.index + 1 == self.choices.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_candidates() {
        assert_eq!(CompletionCycle::new(vec![], "foo"), None);
    }

    #[test]
    fn test_cycle_wraps_through_original() {
        let mut it =
            CompletionCycle::new(vec!["foo bar".into(), "foo baz".into()], "foo").unwrap();
        assert_eq!(it.candidate_count(), 2);
        assert_eq!(it.current(), "foo bar");
        assert_eq!(it.advance(), "foo baz");
        assert_eq!(it.advance(), "foo");
        assert!(it.is_showing_original());
        assert_eq!(it.advance(), "foo bar");
        assert_eq!(it.original(), "foo");
    }

    #[test]
    fn test_closure_is_a_completer() {
        let completer = |line: &str| vec![format!("{line}!")];
        let boxed: BoxedCompleter = Box::new(completer);
        assert_eq!(boxed.complete("hi"), vec!["hi!".to_string()]);
    }
}
