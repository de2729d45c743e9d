use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{evaluate, Board, GameStatus, Player, CELLS};
use crate::error::{GameError, IllegalMove, Result};
use crate::history::HistoryEntry;
use crate::search::Difficulty;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsAi,
}

impl GameMode {
    pub fn toggled(self) -> GameMode {
        match self { GameMode::TwoPlayer => GameMode::VsAi, GameMode::VsAi => GameMode::TwoPlayer }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { GameMode::TwoPlayer => "player", GameMode::VsAi => "ai" })
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "player" | "pvp" | "two-player" => Ok(GameMode::TwoPlayer),
            "ai" | "cpu" | "vs-ai" => Ok(GameMode::VsAi),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

/// Win counters. Survive `Game::reset`; cleared only by `Game::reset_scores`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
}

impl Scores {
    pub fn get(&self, p: Player) -> u32 {
        match p { Player::X => self.x, Player::O => self.o }
    }

    fn bump(&mut self, p: Player) {
        match p { Player::X => self.x += 1, Player::O => self.o += 1 }
    }
}

/// Board, turn, status and scores for one session.
///
/// Status is re-derived from the board after every change. Scores only move
/// on the InProgress -> Won edge inside `apply_move`, so re-reading or
/// restoring a won board never counts twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    scores: Scores,
    mode: GameMode,
    difficulty: Difficulty,
}

impl Default for Game {
    fn default() -> Self { Self::new(GameMode::default(), Difficulty::default()) }
}

impl Game {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            mode,
            difficulty,
        }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn to_move(&self) -> Player { self.to_move }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn scores(&self) -> Scores { self.scores }
    pub fn mode(&self) -> GameMode { self.mode }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
    pub fn is_over(&self) -> bool { self.status.is_terminal() }

    /// The side the engine plays in VsAI mode. The human always has X.
    pub fn ai_player(&self) -> Option<Player> {
        match self.mode { GameMode::VsAi => Some(Player::O), GameMode::TwoPlayer => None }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.ai_player() == Some(self.to_move) && !self.is_over()
    }

    pub fn entry(&self) -> HistoryEntry {
        HistoryEntry { board: self.board, next_to_move: self.to_move }
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus> {
        if index >= CELLS { return Err(IllegalMove::OutOfBounds(index).into()); }
        if self.is_over() { return Err(IllegalMove::GameOver.into()); }
        if player != self.to_move {
            return Err(IllegalMove::WrongTurn { expected: self.to_move, got: player }.into());
        }
        if !self.board.is_empty_at(index) { return Err(IllegalMove::Occupied(index).into()); }

        let prev = self.status;
        self.board = self.board.with(index, player);
        self.to_move = player.other();
        self.status = evaluate(&self.board);
        debug!("{} -> {} ({:?})", player, index, self.status);

        if !prev.is_terminal() {
            match self.status {
                GameStatus::Won { player: w, line } => {
                    self.scores.bump(w);
                    info!("{} wins on {:?}; score X {} - O {}", w, line, self.scores.x, self.scores.o);
                }
                GameStatus::Draw => info!("draw"),
                GameStatus::InProgress => {}
            }
        }
        Ok(self.status)
    }

    /// Show a history snapshot. Status is recomputed from its board; scores are
    /// left alone.
    pub fn restore(&mut self, entry: HistoryEntry) {
        self.board = entry.board;
        self.to_move = entry.next_to_move;
        self.status = evaluate(&self.board);
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
    }

    pub fn reset_scores(&mut self) { self.scores = Scores::default(); }

    pub(crate) fn set_scores(&mut self, scores: Scores) { self.scores = scores; }

    /// Switch mode and start over. Returns false if nothing changed.
    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if mode == self.mode { return false; }
        self.mode = mode;
        self.reset();
        true
    }

    /// Switch difficulty and start over. Returns false if nothing changed.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == self.difficulty { return false; }
        self.difficulty = difficulty;
        self.reset();
        true
    }
}
