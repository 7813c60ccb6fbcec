//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the scene composites into a plain
//! framebuffer of styled character cells, and the renderer flushes that
//! buffer to the terminal, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Composite frames without any terminal I/O ([`SceneView`])
//! - Flush with changed-run diffs so a mostly-static sky stays cheap

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{HudStats, SceneView, Viewport};
