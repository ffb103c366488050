use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use triquito_core::{GameConfig, MatchEngine, MatchState};

fn anti_diag_win(c: &mut Criterion) {
    let moves: [(u8, u8); 7] = [(0, 3), (0, 0), (1, 2), (0, 1), (2, 1), (0, 2), (3, 0)];

    c.bench_function("anti_diag_win_4x4", |b| {
        b.iter(|| {
            let mut engine = MatchEngine::new(GameConfig::new(4));
            for &coords in black_box(&moves) {
                engine.place(coords).unwrap();
            }
            assert_eq!(engine.state(), MatchState::Won);
            black_box(engine)
        })
    });
}

fn drawn_match(c: &mut Criterion) {
    let moves: [(u8, u8); 9] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];

    c.bench_function("drawn_match_3x3", |b| {
        b.iter(|| {
            let mut engine = MatchEngine::new(GameConfig::new(3));
            for &coords in black_box(&moves) {
                engine.place(coords).unwrap();
            }
            assert_eq!(engine.state(), MatchState::Drawn);
            black_box(engine)
        })
    });
}

criterion_group!(benches, anti_diag_win, drawn_match);
criterion_main!(benches);
