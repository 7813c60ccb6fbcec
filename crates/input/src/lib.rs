//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]. Pure
//! functions, no state: the game loop consumes at most one event per tick,
//! so there is no repeat or timing logic here.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_quit};
