//! First-person maze walker (default binary).
//!
//! Fixed-tick game loop: mutate the player from at most one key event, ray
//! cast and composite the frame, present, then sleep out the remainder of
//! the tick. Movement always steps by the tick duration; measured frame
//! time feeds only the optional HUD.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::core::{Player, SimpleRng, Sky, WorldMap};
use tui_maze::input::{handle_key_event, should_quit};
use tui_maze::term::{FrameBuffer, HudStats, SceneView, TerminalRenderer, Viewport};
use tui_maze::types::{
    FOV, PLAYER_START_HEADING, PLAYER_START_X, PLAYER_START_Y, TICK_MS, TICK_SECS,
};

#[derive(Debug, Clone, Copy, Default)]
struct Options {
    hud: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    for arg in args {
        match arg.as_str() {
            "--hud" => opts.hud = true,
            other => bail!("unknown argument: {} (supported: --hud)", other),
        }
    }
    Ok(opts)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: Options) -> Result<()> {
    let map = WorldMap::reference();
    let (width, height) = term.size()?;

    // The sky has no reproducibility requirement; any seed will do.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut rng = SimpleRng::new(seed);
    let sky = Sky::generate(width, height, FOV, &mut rng);

    let mut player = Player::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING);
    let view = SceneView::new(opts.hud);
    let mut fb = FrameBuffer::new(width, height);

    let tick = Duration::from_millis(TICK_MS);
    let mut tick_start = Instant::now();
    let mut frame_time = tick;

    loop {
        // Input first, then render: within a tick the player is mutated
        // before any column is cast, never during.
        let timeout = tick.checked_sub(tick_start.elapsed()).unwrap_or_default();
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        // dt is the fixed tick, not measured frame time,
                        // so motion is deterministic under render load.
                        player.apply(action, TICK_SECS, &map);
                    }
                }
            }
        }

        let stats = opts.hud.then(|| HudStats {
            fps: 1.0 / frame_time.as_secs_f64().max(1e-6),
        });
        view.render_into(
            &map,
            &player,
            &sky,
            stats,
            Viewport::new(width, height),
            &mut fb,
        );
        term.present(&mut fb)?;

        // Sleep out the rest of the tick.
        if let Some(rest) = tick.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(rest);
        }
        frame_time = tick_start.elapsed();
        tick_start = Instant::now();
    }
}
