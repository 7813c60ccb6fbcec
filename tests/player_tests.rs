//! Player tests - heading normalization and collision behavior.

use tui_maze::core::{normalize_angle, Player, WorldMap};
use tui_maze::types::{
    PlayerAction, PLAYER_START_HEADING, PLAYER_START_X, PLAYER_START_Y, TICK_SECS,
};

use std::f64::consts::TAU;

#[test]
fn heading_stays_bounded_under_mixed_turning() {
    let map = WorldMap::reference();
    let mut player = Player::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING);

    for i in 0..5_000 {
        let action = if i % 3 == 0 {
            PlayerAction::TurnLeft
        } else {
            PlayerAction::TurnRight
        };
        player.apply(action, TICK_SECS, &map);
        assert!(
            (0.0..TAU).contains(&player.heading),
            "heading {} escaped [0, 2pi) at step {}",
            player.heading,
            i
        );
    }
}

#[test]
fn normalization_is_idempotent_once_in_range() {
    for i in 0..628 {
        let a = i as f64 / 100.0;
        let once = normalize_angle(a);
        assert_eq!(normalize_angle(once), once);
    }
}

#[test]
fn walking_into_walls_for_a_thousand_ticks_stays_on_the_map() {
    let map = WorldMap::reference();
    // Spawn facing the map edge; heading pi walks toward y = 0 and the
    // west wall of the reference maze.
    let mut player = Player::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING);

    for _ in 0..1_000 {
        player.apply(PlayerAction::StepForward, TICK_SECS, &map);
        assert!((0.0..16.0).contains(&player.x), "x = {}", player.x);
        assert!((0.0..16.0).contains(&player.y), "y = {}", player.y);
    }
}

#[test]
fn blocked_and_open_steps_are_distinguished() {
    let map = WorldMap::reference();

    // Open corridor: the step lands.
    let mut roamer = Player::new(5.0, 5.0, 0.0);
    roamer.apply(PlayerAction::StepForward, TICK_SECS, &map);
    assert!(roamer.y > 5.0);

    // Hard against the far wall: the step reverts.
    let mut cornered = Player::new(14.5, 15.95, 0.0);
    let before = cornered;
    cornered.apply(PlayerAction::StepForward, TICK_SECS, &map);
    assert!((cornered.x - before.x).abs() < 1e-12);
    assert!((cornered.y - before.y).abs() < 1e-12);
}
