// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure where tracing output goes and how verbose it is. Logging is disabled with
/// [`TracingConfig::default`].
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] for the most verbose events that are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

/// `String` in the file variants is the path of the log file, eg:
/// `/tmp/tcp_line_server.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(file_path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(file_path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Display to `preferred_display` if there's no file, otherwise log to both.
    #[must_use]
    pub fn new_display_and_maybe_file(
        preferred_display: DisplayPreference,
        maybe_file_path: Option<String>,
        level_filter: LevelFilter,
    ) -> Self {
        let writer_config = match maybe_file_path {
            Some(file_path) => WriterConfig::DisplayAndFile(preferred_display, file_path),
            None => WriterConfig::Display(preferred_display),
        };
        Self {
            writer_config,
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Nothing would be logged with this configuration.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.level_filter == LevelFilter::OFF
            || matches!(self.writer_config, WriterConfig::None)
    }
}
