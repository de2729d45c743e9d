use rand::rngs::SmallRng;
use rand::SeedableRng;
use synaptic::board::{evaluate, Board, Player};
use synaptic::search::{select_move, Difficulty};

/// Walk every opponent line against the engine and count finished games.
/// Fails if the opponent ever completes a line.
fn explore(board: Board, ai: Player, rng: &mut SmallRng) -> usize {
    let status = evaluate(&board);
    if status.is_terminal() {
        assert_ne!(status.winner(), Some(ai.other()), "engine lost on {:?}", board);
        return 1;
    }
    let side = board.side_to_move();
    if side == ai {
        let m = select_move(&board, ai, Difficulty::Impossible, rng).expect("a move");
        assert!(board.is_empty_at(m));
        explore(board.with(m, ai), ai, rng)
    } else {
        board.empty_cells().into_iter().map(|i| explore(board.with(i, side), ai, rng)).sum()
    }
}

#[test]
fn impossible_as_o_never_loses() {
    let mut rng = SmallRng::seed_from_u64(1);
    let games = explore(Board::new(), Player::O, &mut rng);
    assert!(games > 0);
}

#[test]
fn impossible_as_x_never_loses() {
    let mut rng = SmallRng::seed_from_u64(2);
    let games = explore(Board::new(), Player::X, &mut rng);
    assert!(games > 0);
}
