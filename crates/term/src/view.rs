//! SceneView: composites the maze scene into a framebuffer.
//!
//! This module is pure (no I/O). Per screen column it runs the ray caster,
//! then splits the column into sky, wall, and floor regions and writes one
//! cell per row. The sky scrolls with the heading by indexing into the
//! pre-generated cylinder; the floor fades through a fixed glyph ramp
//! toward the horizon.

use crate::core::{cast_column, Player, Sky, SkyCell, WorldMap};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Walls and floor, a dusky slate blue on black.
const MAZE_STYLE: CellStyle = CellStyle::new(Rgb::new(72, 61, 139), Rgb::new(0, 0, 0));
/// Stars and void.
const SKY_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
/// The moon, pale goldenrod.
const MOON_STYLE: CellStyle = CellStyle::new(Rgb::new(238, 232, 170), Rgb::new(0, 0, 0));

/// Floor brightness ramp, nearest to farthest.
const FLOOR_RAMP: [(f64, char); 4] = [(0.25, '#'), (0.5, 'x'), (0.75, '.'), (0.9, '-')];

/// Diagnostics shown in the optional HUD line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStats {
    pub fps: f64,
}

/// A lightweight terminal renderer for the maze scene.
pub struct SceneView {
    hud: bool,
}

impl SceneView {
    pub fn new(hud: bool) -> Self {
        Self { hud }
    }

    /// Composite one frame into an existing framebuffer.
    ///
    /// This is the per-tick hot path: the framebuffer is reused across
    /// frames and only resized when the terminal size changes.
    pub fn render_into(
        &self,
        map: &WorldMap,
        player: &Player,
        sky: &Sky,
        stats: Option<HudStats>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let w = viewport.width;
        let h = viewport.height;

        for x in 0..w {
            let column = cast_column(map, player, x, w, h);
            let sky_x = sky.column_for(player.heading, x);

            for y in 0..h {
                let fy = f64::from(y);
                if fy <= column.ceiling {
                    let (glyph, style) = if usize::from(y) < sky.height() {
                        match sky.cell(sky_x, usize::from(y)) {
                            cell @ SkyCell::Moon(_) => (cell.glyph(), MOON_STYLE),
                            cell => (cell.glyph(), SKY_STYLE),
                        }
                    } else {
                        // Rows below the sky buffer exist only if the
                        // terminal grew after startup; keep them void.
                        (' ', SKY_STYLE)
                    };
                    fb.put(x, y, glyph, style);
                } else if fy <= column.floor {
                    fb.put(x, y, column.glyph, MAZE_STYLE);
                } else {
                    fb.put(x, y, floor_glyph(fy, f64::from(h)), MAZE_STYLE);
                }
            }
        }

        if self.hud {
            if let Some(stats) = stats {
                let line = format!(
                    "x={:5.2} y={:5.2} a={:4.2} fps={:5.1} w={} c={} r={:.1}",
                    player.x,
                    player.y,
                    player.heading,
                    stats.fps,
                    viewport.width,
                    sky.circumference(),
                    sky.apparent_radius(),
                );
                fb.put_str(0, 0, &line, MAZE_STYLE);
            }
        }
    }
}

/// Floor shading by vertical distance from the horizon: dense blocks at
/// the bottom of the screen thinning to blank at the midline.
fn floor_glyph(fy: f64, screen_h: f64) -> char {
    let b = 1.0 - (fy - screen_h / 2.0) / (screen_h / 2.0);
    for (threshold, glyph) in FLOOR_RAMP {
        if b < threshold {
            return glyph;
        }
    }
    ' '
}
