use log::debug;

use crate::board::{evaluate, Board, Player};
use crate::search::eval::terminal_score;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<usize>,
    pub score: i32,
    pub nodes: u64,
}

/// Exhaustive minimax over the remaining game tree. No pruning: the whole
/// tree below an empty board is under 550k nodes.
#[derive(Default, Debug)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Best move for `ai` on `board`. Empty cells are tried in ascending order
    /// and a later cell replaces the best only if strictly better, so ties go
    /// to the lowest index.
    pub fn search(&mut self, board: &Board, ai: Player) -> SearchResult {
        self.nodes = 0;
        let mut best: Option<usize> = None;
        let mut best_score = i32::MIN;
        for i in board.empty_cells() {
            let child = board.with(i, ai);
            let score = self.minimax(&child, ai, 0, false);
            if score > best_score { best_score = score; best = Some(i); }
        }
        if best.is_none() { best_score = 0; }
        debug!("minimax: ai={} best={:?} score={} nodes={}", ai, best, best_score, self.nodes);
        SearchResult { best, score: best_score, nodes: self.nodes }
    }

    /// Value of `board` for `ai`; `maximizing` is true when `ai` is to move.
    pub fn minimax(&mut self, board: &Board, ai: Player, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if let Some(score) = terminal_score(evaluate(board), ai, depth) { return score; }

        let mover = if maximizing { ai } else { ai.other() };
        let children = board.empty_cells().into_iter().map(|i| board.with(i, mover));
        if maximizing {
            children.map(|c| self.minimax(&c, ai, depth + 1, false)).max().unwrap_or(0)
        } else {
            children.map(|c| self.minimax(&c, ai, depth + 1, true)).min().unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_win_scores_ten() {
        let b = Board::parse("OO.XX.X..").unwrap();
        let mut s = Searcher::new();
        let r = s.search(&b, Player::O);
        assert_eq!(r.best, Some(2));
        assert_eq!(r.score, 10);
    }

    #[test]
    fn full_board_has_no_best_move() {
        let b = Board::parse("XOXXOOOXX").unwrap();
        let r = Searcher::new().search(&b, Player::O);
        assert_eq!(r.best, None);
        assert_eq!(r.nodes, 0);
    }

    #[test]
    fn empty_board_is_a_draw_with_corner_first() {
        let mut s = Searcher::new();
        let r = s.search(&Board::new(), Player::X);
        assert_eq!(r.score, 0);
        // All first moves draw; the lowest index wins the tie.
        assert_eq!(r.best, Some(0));
        assert!(r.nodes > 500_000);
    }
}
