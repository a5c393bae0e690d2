//! Benchmarks for note matching and the beat clock.

use std::hint::black_box;
use std::sync::Arc;

use criterion::Criterion;
use hitline::audio::audio_params;
use hitline::display::{draw_field, MatrixFrame};
use hitline::track::{Lane, Track};
use hitline::Game;

fn builtin_game() -> Game {
    let (writer, _reader) = audio_params();
    Game::new(Arc::new(Track::builtin()), writer)
}

pub fn bench_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("game/press");

    // Every press after the first in a group takes the duplicate path, so
    // restart each iteration to measure a first press.
    let mut game = builtin_game();
    for _ in 0..40 {
        game.advance();
    }
    group.bench_function("first_press", |b| {
        b.iter(|| {
            let mut game = builtin_game();
            black_box(game.on_lane_pressed(black_box(Lane::ALL[0])))
        })
    });
    group.bench_function("duplicate_press", |b| {
        b.iter(|| black_box(game.on_lane_pressed(black_box(Lane::ALL[1]))))
    });

    group.finish();
}

pub fn bench_full_track(c: &mut Criterion) {
    let mut group = c.benchmark_group("game/advance");

    group.bench_function("builtin_track", |b| {
        b.iter(|| {
            let mut game = builtin_game();
            while let Some(report) = game.advance() {
                black_box(report);
            }
            black_box(game.score())
        })
    });

    group.finish();
}

pub fn bench_draw_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("game/draw");
    let mut game = builtin_game();
    for _ in 0..60 {
        game.advance();
    }
    let mut frame = MatrixFrame::new();

    group.bench_function("field", |b| {
        b.iter(|| {
            draw_field(black_box(&game), &mut frame);
        })
    });

    group.finish();
}
