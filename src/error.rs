use thiserror::Error;

use crate::board::Player;

/// Why a move was refused by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("cell {0} is already occupied")]
    Occupied(usize),
    #[error("cell {0} is off the board")]
    OutOfBounds(usize),
    #[error("the game is already over")]
    GameOver,
    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Player, got: Player },
}

/// Recoverable failures of the core. The front-end treats every one of them
/// as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("history index {index} out of range (timeline has {len} entries)")]
    OutOfRange { index: usize, len: usize },
    #[error("no move available: the board is full")]
    EngineExhausted,
    #[error("unknown difficulty '{0}' (expected easy, medium or impossible)")]
    UnknownDifficulty(String),
    #[error("unknown game mode '{0}' (expected player or ai)")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
