//! Ray caster - per-column wall distance, corner detection, shading.
//!
//! One ray is cast per screen column, marching outward in [`RAY_STEP`]
//! increments until it enters a wall cell, leaves the map, or exceeds
//! [`MAX_DEPTH`]. Leaving the map counts as a hit at full depth so the
//! outside of the world renders as distant wall rather than void.
//!
//! Columns are independent: each cast reads only the map and the player
//! pose, so the loop over columns could run in any order.

use arrayvec::ArrayVec;

use crate::map::WorldMap;
use crate::player::Player;
use crate::types::{CORNER_TOLERANCE, FOV, MAX_DEPTH, RAY_STEP};

/// Distance-banded wall brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallShade {
    /// Within a third of full depth.
    Bright,
    /// Within half of full depth.
    Medium,
    /// Within ~90% of full depth.
    Faint,
    /// Effectively out of sight.
    Black,
}

impl WallShade {
    pub fn from_distance(distance: f64) -> Self {
        if distance <= MAX_DEPTH / 3.0 {
            WallShade::Bright
        } else if distance <= MAX_DEPTH / 2.0 {
            WallShade::Medium
        } else if distance <= MAX_DEPTH / 1.1 {
            WallShade::Faint
        } else {
            WallShade::Black
        }
    }

    pub fn glyph(self) -> char {
        match self {
            WallShade::Bright => '█',
            WallShade::Medium => '▓',
            WallShade::Faint => '░',
            WallShade::Black => ' ',
        }
    }
}

/// What a single screen column sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnView {
    /// Distance to the wall hit, capped at [`MAX_DEPTH`].
    pub distance: f64,
    /// The hit landed on the edge between two wall blocks.
    pub boundary: bool,
    /// Rows at or above this line are sky.
    pub ceiling: f64,
    /// Rows below this line are floor.
    pub floor: f64,
    /// Wall glyph for the column, blank when `boundary` is set.
    pub glyph: char,
}

/// Cast the ray for screen column `column` of `screen_w`.
pub fn cast_column(
    map: &WorldMap,
    player: &Player,
    column: u16,
    screen_w: u16,
    screen_h: u16,
) -> ColumnView {
    // Fan the field of view across the columns.
    let ray_angle =
        (player.heading - FOV / 2.0) + (f64::from(column) / f64::from(screen_w)) * FOV;
    let eye_x = ray_angle.sin();
    let eye_y = ray_angle.cos();

    let mut distance = 0.0;
    let mut hit_wall = false;
    let mut boundary = false;

    while !hit_wall && distance < MAX_DEPTH {
        distance += RAY_STEP;
        let test_x = (player.x + eye_x * distance).floor() as i64;
        let test_y = (player.y + eye_y * distance).floor() as i64;

        match map.tile(test_x, test_y) {
            // Off the map: treat as a hit at full depth.
            None => {
                hit_wall = true;
                distance = MAX_DEPTH;
            }
            Some(tile) if tile.is_wall() => {
                hit_wall = true;
                boundary = corner_boundary(player, eye_x, eye_y, test_x, test_y, distance);
            }
            Some(_) => {}
        }
    }
    if !hit_wall {
        distance = MAX_DEPTH;
    }

    let ceiling = f64::from(screen_h) / 2.0 - f64::from(screen_h) / distance;
    let floor = f64::from(screen_h) - ceiling;

    let glyph = if boundary {
        // Black out block edges so the maze reads as blocks.
        ' '
    } else {
        WallShade::from_distance(distance).glyph()
    };

    ColumnView {
        distance,
        boundary,
        ceiling,
        floor,
        glyph,
    }
}

/// Classify a wall hit as a block corner.
///
/// For each corner of the hit cell, take its distance from the player and
/// the dot product of the ray with the player-to-corner direction. Of the
/// three nearest corners, the first whose angle to the ray is inside
/// [`CORNER_TOLERANCE`] decides: it is a boundary iff it is closer than the
/// wall hit itself. The farthest corner is never examined, so a boundary
/// can occasionally show through an occluded face; that artifact is part of
/// the look.
fn corner_boundary(
    player: &Player,
    eye_x: f64,
    eye_y: f64,
    cell_x: i64,
    cell_y: i64,
    hit_distance: f64,
) -> bool {
    let mut corners: ArrayVec<(f64, f64), 4> = ArrayVec::new();
    for tx in 0..2 {
        for ty in 0..2 {
            let vx = (cell_x + tx) as f64 - player.x;
            let vy = (cell_y + ty) as f64 - player.y;
            let d = (vx * vx + vy * vy).sqrt();
            let dot = (eye_x * vx + eye_y * vy) / d;
            corners.push((d, dot));
        }
    }

    corners.sort_by(|a, b| a.0.total_cmp(&b.0));

    for &(d, dot) in corners.iter().take(3) {
        if dot.acos() < CORNER_TOLERANCE {
            return d < hit_distance;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::WorldMap;
    use std::f64::consts::PI;

    #[test]
    fn shade_bands_follow_depth_thresholds() {
        assert_eq!(WallShade::from_distance(1.0), WallShade::Bright);
        assert_eq!(WallShade::from_distance(MAX_DEPTH / 3.0), WallShade::Bright);
        assert_eq!(WallShade::from_distance(6.0), WallShade::Medium);
        assert_eq!(WallShade::from_distance(10.0), WallShade::Faint);
        assert_eq!(WallShade::from_distance(15.5), WallShade::Black);
    }

    #[test]
    fn open_map_ray_runs_to_full_depth() {
        // 32x32 of open floor rimmed by nothing: every cell empty, so the
        // ray leaves the map and caps at MAX_DEPTH.
        let source = ".".repeat(32 * 32);
        let map = WorldMap::parse(32, 32, &source).unwrap();
        let player = Player::new(16.0, 16.0, 0.0);
        let view = cast_column(&map, &player, 40, 80, 24);
        assert_eq!(view.distance, MAX_DEPTH);
        assert!(!view.boundary);
    }

    #[test]
    fn head_on_wall_distance_within_step_tolerance() {
        // A single wall slice 5 cells ahead along +y.
        let mut source = String::new();
        for _x in 0..8 {
            for y in 0..8 {
                source.push(if y == 6 { '#' } else { '.' });
            }
        }
        let map = WorldMap::parse(8, 8, &source).unwrap();
        // heading 0 looks along +y; the wall face is at y = 6.
        let player = Player::new(4.5, 1.0, 0.0);
        let view = cast_column(&map, &player, 40, 80, 24);
        assert!((view.distance - 5.0).abs() <= RAY_STEP + 1e-9);
        assert!(view.ceiling < view.floor);
    }

    #[test]
    fn ceiling_and_floor_are_symmetric_about_midline() {
        let map = WorldMap::reference();
        let player = Player::new(14.4, 14.7, PI);
        let view = cast_column(&map, &player, 40, 80, 24);
        assert!((view.ceiling + view.floor - 24.0).abs() < 1e-9);
    }
}
