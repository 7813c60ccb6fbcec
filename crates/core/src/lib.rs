//! Core simulation module - map, player, ray caster, sky
//!
//! Everything in this crate is deterministic and free of I/O: it can be
//! driven entirely from tests. The terminal layer consumes it through a
//! handful of value types ([`ColumnView`], [`SkyCell`]) and never reaches
//! back in.
//!
//! Per tick the loop mutates the [`Player`] first and only then renders;
//! during rendering all of this state is read-only. Columns are cast
//! independently and share no mutable state.

pub mod map;
pub mod player;
pub mod ray;
pub mod rng;
pub mod sky;

pub use tui_maze_types as types;

pub use map::{MapError, WorldMap};
pub use player::{normalize_angle, Player};
pub use ray::{cast_column, ColumnView, WallShade};
pub use rng::SimpleRng;
pub use sky::{Sky, SkyCell};
