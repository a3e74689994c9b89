// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests: raw key bytes in, exact frames out.
//!
//! Each test feeds a byte script to a [`crate::LineEditor`] and checks every frame it
//! flushed, using [`crate::test_fixtures::FrameRecorderMock`]. One frame is everything
//! written between two flushes, so a bell shows up as a frame of its own (`"\x07"`).

mod fixtures;
mod history_keys_test;
mod session_lifecycle_test;
