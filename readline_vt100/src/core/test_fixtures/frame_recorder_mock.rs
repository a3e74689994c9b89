// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex as StdMutex, PoisonError}};

#[derive(Debug, Default)]
struct Recording {
    pending: Vec<u8>,
    frames: Vec<String>,
}

/// A [Write] that groups output into frames. Everything written between two flushes is
/// one frame. A flush with nothing pending records nothing.
///
/// Since the editor writes each redraw (or bell) and then flushes once, this lets a
/// test assert the exact sequence of screen updates. Clones share the same recording.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorderMock {
    inner: Arc<StdMutex<Recording>>,
}

impl FrameRecorderMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Frames completed so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .frames
            .clone()
    }

    /// Bytes written after the last flush.
    #[must_use]
    pub fn pending(&self) -> Vec<u8> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .clone()
    }
}

impl Write for FrameRecorderMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        let mut recording = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if !recording.pending.is_empty() {
            let frame = String::from_utf8_lossy(&recording.pending).into_owned();
            recording.frames.push(frame);
            recording.pending.clear();
        }
        Ok(())
    }
}
