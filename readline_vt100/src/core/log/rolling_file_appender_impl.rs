// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::miette;
use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;

/// Create an appender that writes to `path_str` and never rotates.
///
/// Note that if you wrap this up in a non blocking writer, the guard has to outlive
/// the subscriber, otherwise buffered lines are lost on exit.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette!(
            "Can't access the folder of {}. It might not exist, or you might not have \
             the required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette!(
            "Can't get a file name from {}. The path must end in a file name.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
