use pretty_assertions::assert_eq;
use std::fs::create_dir_all;
use synaptic::selfplay::{generate_games, play_game, read_records, write_records, Outcome, SelfPlayParams, Tally};
use synaptic::Difficulty;

#[test]
fn impossible_against_itself_always_draws() {
    let params = SelfPlayParams { games: 4, x: Difficulty::Impossible, o: Difficulty::Impossible, seed: 11 };
    let games = generate_games(&params);
    assert_eq!(games.len(), 4);
    for g in &games {
        assert_eq!(g.result, Outcome::Draw);
        assert_eq!(g.moves.len(), 9);
        // Ties at the root go to the lowest index.
        assert_eq!(g.moves[0], 0);
    }
    // No randomness at this level: every game is the same.
    assert!(games.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn selfplay_is_deterministic_by_seed() {
    let params = SelfPlayParams { games: 6, x: Difficulty::Easy, o: Difficulty::Medium, seed: 42 };
    let g1 = generate_games(&params);
    let g2 = generate_games(&params);
    assert_eq!(g1, g2);
    assert_eq!(g1[3], play_game(&params, 3));
}

#[test]
fn weaker_sides_never_beat_impossible() {
    let p = SelfPlayParams { games: 40, x: Difficulty::Easy, o: Difficulty::Impossible, seed: 5 };
    assert_eq!(Tally::of(&generate_games(&p)).x, 0);
    let p = SelfPlayParams { games: 40, x: Difficulty::Impossible, o: Difficulty::Medium, seed: 6 };
    assert_eq!(Tally::of(&generate_games(&p)).o, 0);
}

#[test]
fn write_and_read_records() {
    let params = SelfPlayParams { games: 5, x: Difficulty::Easy, o: Difficulty::Easy, seed: 123 };
    let games = generate_games(&params);
    let outdir = std::path::Path::new("target/selfplay_test");
    create_dir_all(outdir).unwrap();
    let path = outdir.join("records.jsonl");
    write_records(&games, &path).unwrap();
    let back = read_records(&path).unwrap();
    assert_eq!(back, games);
    let t = Tally::of(&back);
    assert_eq!(t.x + t.o + t.draws, 5);
}
