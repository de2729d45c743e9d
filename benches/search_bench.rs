use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use synaptic::board::{Board, Player};
use synaptic::search::minimax::Searcher;
use synaptic::search::{select_move, Difficulty};

fn bench_search(c: &mut Criterion) {
    let empty = Board::new();
    c.bench_function("minimax_empty_board", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new();
            let r = s.search(black_box(&empty), Player::X);
            black_box(r.nodes)
        })
    });

    let mid = Board::parse("X...O....").expect("valid layout");
    c.bench_function("minimax_after_two_plies", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new();
            black_box(s.search(black_box(&mid), Player::X).best)
        })
    });

    c.bench_function("medium_select_move", |ben| {
        let mut rng = SmallRng::seed_from_u64(9);
        ben.iter(|| black_box(select_move(black_box(&mid), Player::X, Difficulty::Medium, &mut rng)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
