// Tic-Tac-Toe core: evaluator, move engine, state machine, timeline
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod persist;
pub mod search;
pub mod selfplay;
pub mod session;

// Re-exports for front-ends
pub use board::{evaluate, Board, Cell, GameStatus, Player};
pub use config::SessionConfig;
pub use error::{GameError, IllegalMove};
pub use game::{Game, GameMode, Scores};
pub use history::{HistoryEntry, Timeline};
pub use search::{select_move, Difficulty};
pub use session::{GameEvent, Session};
