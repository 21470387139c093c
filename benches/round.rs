//! Full-round simulation throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ship_captain_crew::{DiceGame, Session, ShipCaptainCrew};

fn bench_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("play_round");

    for players in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &players| {
            let game = DiceGame::with_seed(players, 5, 3, 42).unwrap();
            let mut session = Session::new(game, ShipCaptainCrew::default());
            b.iter(|| black_box(session.play_round().unwrap()));
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let mut game = DiceGame::with_seed(2, 5, 3, 7).unwrap();
    game.start_new_game();
    game.roll_dice().unwrap();
    for face in [6, 5, 4] {
        game.auto_hold(face);
    }

    c.bench_function("score_current_player", |b| {
        b.iter(|| {
            game.reset_players();
            black_box(game.score_current_player().unwrap())
        })
    });
}

criterion_group!(benches, bench_rounds, bench_scoring);
criterion_main!(benches);
