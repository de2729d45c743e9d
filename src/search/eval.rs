use crate::board::{GameStatus, Player};

// Terminal scoring helpers
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// Score of a terminal status from `ai`'s point of view, `depth` plies below
/// the root child. Quicker wins score higher, slower losses score higher.
/// Returns `None` while the game is still in progress.
pub fn terminal_score(status: GameStatus, ai: Player, depth: i32) -> Option<i32> {
    match status {
        GameStatus::Won { player, .. } if player == ai => Some(WIN_SCORE - depth),
        GameStatus::Won { .. } => Some(depth - WIN_SCORE),
        GameStatus::Draw => Some(DRAW_SCORE),
        GameStatus::InProgress => None,
    }
}
