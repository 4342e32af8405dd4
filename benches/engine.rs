use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kuba::rules::{has_legal_push, legal_pushes};
use kuba::{Board, Direction, KubaGame, PlayerColor};

const OPENING: [(&str, (i32, i32), Direction); 4] = [
    ("A", (0, 0), Direction::Right),
    ("B", (1, 6), Direction::Left),
    ("A", (1, 0), Direction::Back),
    ("B", (1, 4), Direction::Back),
];

fn bench_opening(c: &mut Criterion) {
    c.bench_function("play_opening", |b| {
        b.iter(|| {
            let mut game =
                KubaGame::new(("A", PlayerColor::White), ("B", PlayerColor::Black)).unwrap();
            for (player, at, direction) in OPENING {
                game.make_move(player, at, direction);
            }
            black_box(game)
        })
    });
}

fn bench_move_generation(c: &mut Criterion) {
    let board = Board::starting();

    c.bench_function("legal_pushes_start", |b| {
        b.iter(|| legal_pushes(black_box(&board), PlayerColor::White, None).count())
    });

    c.bench_function("has_legal_push_start", |b| {
        b.iter(|| has_legal_push(black_box(&board), PlayerColor::Black, None))
    });
}

criterion_group!(benches, bench_opening, bench_move_generation);
criterion_main!(benches);
