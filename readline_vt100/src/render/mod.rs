// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod compose_frame;
pub mod line_geometry;
pub mod render_state;

// Re-export.
pub use compose_frame::*;
pub use line_geometry::*;
pub use render_state::*;
