// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serve a line editor to every TCP client.
//!
//! ```sh
//! cargo run --example tcp_line_server -- --port 2022 --log-level debug
//! ```
//!
//! Then connect from a terminal in raw mode, eg:
//!
//! ```sh
//! stty raw -echo; nc localhost 2022; stty sane
//! ```
//!
//! - <kbd>Tab</kbd> cycles through three fixed completions.
//! - Typing `foo ` or `foo bar ` shows a hint.
//! - Typing `adjust` asks the terminal for its size.

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_readline_vt100::{DisplayPreference, Hint, LineEditor, ReadlineError,
                          ReadlineEvent, TracingConfig, unicode_char_width};
use std::{io::Write,
          net::{SocketAddr, TcpListener, TcpStream},
          thread};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "tcp_line_server")]
#[command(about = "Line editor over a raw TCP socket", version)]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
struct CLIArg {
    #[arg(long, short = 'p', default_value_t = 2022, help = "Port to listen on")]
    port: u16,

    #[arg(long, default_value = "> ", help = "Prompt shown before each line")]
    prompt: String,

    #[arg(
        long,
        short = 'u',
        help = "Measure wide (eg: CJK, emoji) characters with their real terminal width"
    )]
    unicode_width: bool,

    #[arg(long, help = "Also write the log to this file")]
    log_file: Option<String>,

    #[arg(
        long,
        default_value = "info",
        help = "One of off, error, warn, info, debug, trace"
    )]
    log_level: LevelFilter,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    TracingConfig::new_display_and_maybe_file(
        DisplayPreference::Stderr,
        cli_arg.log_file.clone(),
        cli_arg.log_level,
    )
    .install_global()?;

    let listener = TcpListener::bind(("0.0.0.0", cli_arg.port)).into_diagnostic()?;
    tracing::info!(message = "listening", port = cli_arg.port);

    for maybe_stream in listener.incoming() {
        let stream = match maybe_stream {
            Ok(stream) => stream,
            Err(error) => {
                tracing::warn!(message = "failed to accept connection", ?error);
                continue;
            }
        };

        let prompt = cli_arg.prompt.clone();
        let unicode_width = cli_arg.unicode_width;
        thread::spawn(move || {
            let peer = stream.peer_addr().ok();
            if let Err(error) = handle_connection(stream, prompt, unicode_width) {
                tracing::warn!(message = "connection ended with error", ?peer, ?error);
            }
        });
    }

    Ok(())
}

fn handle_connection(
    stream: TcpStream,
    prompt: String,
    unicode_width: bool,
) -> miette::Result<()> {
    let peer: Option<SocketAddr> = stream.peer_addr().ok();
    tracing::info!(message = "connection opened", ?peer);

    let reader = stream.try_clone().into_diagnostic()?;
    let mut editor = LineEditor::new(reader, stream)
        .with_prompt(prompt)
        .with_completer(complete)
        .with_hinter(hint);
    if unicode_width {
        editor = editor.with_width_fn(unicode_char_width);
    }

    loop {
        let line = match editor.line() {
            Ok(ReadlineEvent::Line(line)) => line,
            Ok(event @ (ReadlineEvent::Eof | ReadlineEvent::Interrupted(_))) => {
                tracing::info!(message = "connection closed by user", ?peer, ?event);
                return Ok(());
            }
            Err(ReadlineError::ChannelClosed) => {
                tracing::info!(message = "connection closed by peer", ?peer);
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };

        tracing::info!(message = "line", ?peer, %line);
        write!(editor.output_mut(), "\r\nyou have typed: {line}\r\n").into_diagnostic()?;
        editor.output_mut().flush().into_diagnostic()?;

        if line == "adjust" {
            tracing::info!(message = "adjusting", before = %editor.dimensions());
            match editor.adjust_dimensions() {
                Ok(dimensions) => tracing::info!(message = "adjusted", %dimensions),
                Err(error) if error.is_protocol_error() => {
                    tracing::warn!(message = "keeping old dimensions", ?error);
                }
                Err(error) => return Err(error.into()),
            }
        }

        editor.add_history_entry(line);
    }
}

fn complete(_line: &str) -> Vec<String> {
    vec![
        "Completion #1".into(),
        "Completion #2".into(),
        "Completion #3".into(),
    ]
}

fn hint(line: &str) -> Option<Hint> {
    match line {
        "foo " => Some(Hint::new("bar baz")),
        "foo bar " => Some(Hint::new("baz").bold(true)),
        _ => None,
    }
}
