//! Player pose and collision.
//!
//! The player is owned by the game loop and mutated only here, before any
//! rendering happens in a tick. Collision is move-then-undo: the tentative
//! step is applied, probed, and subtracted back exactly if it landed in a
//! wall or off the map. There is no sliding along walls and no clamping to
//! the wall face; a blocked step leaves the position bit-for-bit unchanged.

use crate::map::WorldMap;
use crate::types::{PlayerAction, TURN_SPEED, WALK_SPEED};
use std::f64::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
///
/// The sky cylinder is indexed by the heading, so the heading must stay
/// bounded instead of accumulating full turns.
pub fn normalize_angle(angle: f64) -> f64 {
    angle - TAU * (angle / TAU).floor()
}

/// The player's pose: position in map units, heading in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Player {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: normalize_angle(heading),
        }
    }

    /// Apply one input action with the fixed tick as `dt`.
    pub fn apply(&mut self, action: PlayerAction, dt: f64, map: &WorldMap) {
        match action {
            PlayerAction::TurnLeft => self.turn(-1.0, dt),
            PlayerAction::TurnRight => self.turn(1.0, dt),
            PlayerAction::StepForward => self.walk(1.0, dt, map),
            PlayerAction::StepBackward => self.walk(-1.0, dt, map),
        }
    }

    fn turn(&mut self, sign: f64, dt: f64) {
        self.heading = normalize_angle(self.heading + sign * TURN_SPEED * dt);
    }

    fn walk(&mut self, sign: f64, dt: f64, map: &WorldMap) {
        let dx = self.heading.sin() * WALK_SPEED * dt * sign;
        let dy = self.heading.cos() * WALK_SPEED * dt * sign;
        self.x += dx;
        self.y += dy;
        if map.blocks(self.x, self.y) {
            self.x -= dx;
            self.y -= dy;
        }
    }
}
