// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Read, Result, Write};

/// Every read fails with [`ErrorKind::ConnectionReset`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize> {
        Err(Error::from(ErrorKind::ConnectionReset))
    }
}

/// Every write and flush fails with [`ErrorKind::BrokenPipe`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> Result<()> { Err(Error::from(ErrorKind::BrokenPipe)) }
}

/// Fails the first read with [`ErrorKind::Interrupted`] (like a read cut short by a
/// signal), then serves `data`.
#[derive(Debug, Clone)]
pub struct InterruptOnceReader {
    interrupted: bool,
    data: std::io::Cursor<Vec<u8>>,
}

impl InterruptOnceReader {
    #[must_use]
    pub fn new(data: &[u8]) -> Self {
        Self {
            interrupted: false,
            data: std::io::Cursor::new(data.to_vec()),
        }
    }
}

impl Read for InterruptOnceReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(Error::from(ErrorKind::Interrupted));
        }
        self.data.read(buf)
    }
}
