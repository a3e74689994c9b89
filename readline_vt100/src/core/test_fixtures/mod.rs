// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod failing_io;
pub mod frame_recorder_mock;
pub mod stdout_mock;

// Re-export.
pub use failing_io::*;
pub use frame_recorder_mock::*;
pub use stdout_mock::*;
