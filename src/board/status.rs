use serde::{Deserialize, Serialize};

use super::{Board, Player};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: [usize; 3] },
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool { !matches!(self, GameStatus::InProgress) }

    pub fn winner(&self) -> Option<Player> {
        match *self { GameStatus::Won { player, .. } => Some(player), _ => None }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match *self { GameStatus::Won { line, .. } => Some(line), _ => None }
    }
}

/// Win/draw status of `board`. The first completed line in `LINES` order wins.
pub fn evaluate(board: &Board) -> GameStatus {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(p) = board.get(a).player() {
            if board.get(b) == board.get(a) && board.get(c) == board.get(a) {
                return GameStatus::Won { player: p, line };
            }
        }
    }
    if board.is_full() { GameStatus::Draw } else { GameStatus::InProgress }
}

/// Every player that owns at least one completed line. Well-formed games
/// never produce more than one.
pub fn winners(board: &Board) -> Vec<Player> {
    let mut out = Vec::new();
    for [a, b, c] in LINES {
        if let Some(p) = board.get(a).player() {
            if board.get(b) == board.get(a) && board.get(c) == board.get(a) && !out.contains(&p) {
                out.push(p);
            }
        }
    }
    out
}
