use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_maze::core::{cast_column, Player, SimpleRng, Sky, WorldMap};
use tui_maze::term::{FrameBuffer, SceneView, Viewport};
use tui_maze::types::{FOV, PLAYER_START_HEADING, PLAYER_START_X, PLAYER_START_Y};

fn bench_single_column(c: &mut Criterion) {
    let map = WorldMap::reference();
    let player = Player::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING);

    c.bench_function("cast_center_column", |b| {
        b.iter(|| cast_column(&map, &player, black_box(40), 80, 24))
    });
}

fn bench_column_fan(c: &mut Criterion) {
    let map = WorldMap::reference();
    let player = Player::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING);

    c.bench_function("cast_80_columns", |b| {
        b.iter(|| {
            for x in 0..80 {
                cast_column(&map, &player, black_box(x), 80, 24);
            }
        })
    });
}

fn bench_sky_generation(c: &mut Criterion) {
    c.bench_function("generate_sky_80x24", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(12345);
            Sky::generate(black_box(80), black_box(24), FOV, &mut rng)
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let map = WorldMap::reference();
    let player = Player::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING);
    let mut rng = SimpleRng::new(12345);
    let sky = Sky::generate(80, 24, FOV, &mut rng);
    let view = SceneView::new(false);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("composite_frame_80x24", |b| {
        b.iter(|| {
            view.render_into(&map, &player, &sky, None, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_single_column,
    bench_column_fan,
    bench_sky_generation,
    bench_full_frame
);
criterion_main!(benches);
