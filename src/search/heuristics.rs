use rand::Rng;

use crate::board::{evaluate, Board, Player, CENTER};
use crate::search::noise::{random_corner, random_empty};

/// First empty cell (lowest index) that completes a line for `player`.
pub fn winning_cell(board: &Board, player: Player) -> Option<usize> {
    board.empty_cells().into_iter().find(|&i| evaluate(&board.with(i, player)).winner() == Some(player))
}

/// Rule-based Medium play, first matching rule wins:
/// win, block, center, random corner, random cell.
pub fn medium_move<R: Rng>(board: &Board, ai: Player, rng: &mut R) -> Option<usize> {
    if let Some(i) = winning_cell(board, ai) { return Some(i); }
    if let Some(i) = winning_cell(board, ai.other()) { return Some(i); }
    if board.is_empty_at(CENTER) { return Some(CENTER); }
    random_corner(board, rng).or_else(|| random_empty(board, rng))
}
