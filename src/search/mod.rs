pub mod eval;
pub mod heuristics;
pub mod minimax;
pub mod noise;

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Impossible];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "impossible" | "hard" | "i" => Ok(Difficulty::Impossible),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Pick the move for `ai` on `board` at the given difficulty.
///
/// Easy and Medium draw from `rng`; Impossible is deterministic for a fixed
/// board. A full board yields `EngineExhausted` and the caller must not
/// apply anything.
pub fn select_move<R: Rng>(board: &Board, ai: Player, difficulty: Difficulty, rng: &mut R) -> Result<usize> {
    if board.is_full() { return Err(GameError::EngineExhausted); }
    let choice = match difficulty {
        Difficulty::Easy => noise::random_empty(board, rng),
        Difficulty::Medium => heuristics::medium_move(board, ai, rng),
        Difficulty::Impossible => minimax::Searcher::new().search(board, ai).best,
    };
    debug!("select_move: ai={} difficulty={} -> {:?}", ai, difficulty, choice);
    choice.ok_or(GameError::EngineExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("Impossible".parse::<Difficulty>().unwrap(), Difficulty::Impossible);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!(matches!("nightmare".parse::<Difficulty>(), Err(GameError::UnknownDifficulty(_))));
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
    }
}
