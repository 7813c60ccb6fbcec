//! Sky generator - cylindrical starfield with a fixed moon.
//!
//! The sky is the horizontal field of view unwrapped onto a cylinder: with
//! apparent radius `r = screen_width / FOV`, the full turn is a ring of
//! `round(2πr)` columns, so panning the view scrolls through a consistent,
//! non-repeating backdrop. The buffer is built once at startup, sized to
//! the display, and never mutated afterwards.

use crate::player::normalize_angle;
use crate::rng::SimpleRng;
use crate::types::{MOON_ANGLE, SKY_SHIFT, STAR_DENSITY};
use std::f64::consts::TAU;

/// The moon bitmap. `'@'` is the transparent sentinel; everything else is
/// drawn verbatim.
pub const MOON: [&str; 6] = [
    "@@@██████@@@",
    "@▓▓▓▓▓█▓▓██@",
    "▓▓▓▓███▓▓▓█▓",
    "▓▓██▓████▓██",
    "@▓▓▓▓▓█████@",
    "@@@██████@@@",
];

/// Transparent sentinel in the moon bitmap.
pub const MOON_TRANSPARENT: char = '@';

/// Moon placement: rows from the top of the sky.
const MOON_TOP: usize = 1;

/// One cell of the sky buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCell {
    /// The ebon void.
    Void,
    /// A star.
    Star,
    /// Part of the moon, carrying its bitmap glyph.
    Moon(char),
}

impl SkyCell {
    pub fn glyph(self) -> char {
        match self {
            SkyCell::Void => ' ',
            SkyCell::Star => '.',
            SkyCell::Moon(g) => g,
        }
    }
}

/// The generated sky: a `circumference x height` ring of cells.
#[derive(Debug, Clone)]
pub struct Sky {
    circumference: usize,
    height: usize,
    apparent_radius: f64,
    cells: Vec<SkyCell>,
}

impl Sky {
    /// Build the sky for a display of `screen_w x screen_h` cells viewed
    /// through `fov` radians. Star placement draws from `rng`; everything
    /// else is deterministic in the screen geometry.
    pub fn generate(screen_w: u16, screen_h: u16, fov: f64, rng: &mut SimpleRng) -> Self {
        let height = (usize::from(screen_h) / 2).max(1);
        let apparent_radius = f64::from(screen_w) / fov;
        let circumference = (TAU * apparent_radius).round() as usize;

        let moon_left = (apparent_radius * MOON_ANGLE).round() as usize;
        let moon_rows: Vec<Vec<char>> = MOON.iter().map(|row| row.chars().collect()).collect();
        let moon_width = moon_rows[0].len();

        let mut cells = Vec::with_capacity(circumference * height);
        for x in 0..circumference {
            for y in 0..height {
                let in_moon = x >= moon_left
                    && x < moon_left + moon_width
                    && y >= MOON_TOP
                    && y < MOON_TOP + moon_rows.len();
                let moon_glyph = if in_moon {
                    Some(moon_rows[y - MOON_TOP][x - moon_left])
                        .filter(|&g| g != MOON_TRANSPARENT)
                } else {
                    None
                };

                let cell = match moon_glyph {
                    Some(g) => SkyCell::Moon(g),
                    None if rng.next_f64() < STAR_DENSITY => SkyCell::Star,
                    None => SkyCell::Void,
                };
                cells.push(cell);
            }
        }

        Self {
            circumference,
            height,
            apparent_radius,
            cells,
        }
    }

    pub fn circumference(&self) -> usize {
        self.circumference
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn apparent_radius(&self) -> f64 {
        self.apparent_radius
    }

    /// Fetch the cell at ring column `x`, row `y` from the top.
    pub fn cell(&self, x: usize, y: usize) -> SkyCell {
        debug_assert!(x < self.circumference && y < self.height);
        self.cells[x * self.height + y]
    }

    /// The ring column that screen column `screen_x` shows when facing
    /// `heading`.
    pub fn column_for(&self, heading: f64, screen_x: u16) -> usize {
        let angle = normalize_angle(heading - SKY_SHIFT);
        (usize::from(screen_x) + (self.apparent_radius * angle).round() as usize)
            % self.circumference
    }
}
