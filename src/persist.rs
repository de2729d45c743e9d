use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{evaluate, Board, Cell, Player, CELLS};
use crate::game::Scores;
use crate::history::HistoryEntry;
use crate::search::Difficulty;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

/// Everything needed to resume a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board: Board,
    pub x_is_next: bool,
    pub scores: Scores,
    pub timeline: Vec<HistoryEntry>,
    pub cursor: usize,
    pub difficulty: Difficulty,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            x_is_next: true,
            scores: Scores::default(),
            timeline: vec![HistoryEntry::start()],
            cursor: 0,
            difficulty: Difficulty::default(),
        }
    }
}

impl Snapshot {
    pub fn to_move(&self) -> Player { if self.x_is_next { Player::X } else { Player::O } }

    /// Reject data that parses but cannot have come from a real session.
    pub fn validate(&self) -> Result<(), PersistError> {
        let invalid = |m: String| Err(PersistError::Invalid(m));
        if self.timeline.is_empty() { return invalid("empty timeline".into()); }
        if self.timeline[0] != HistoryEntry::start() { return invalid("timeline does not start from an empty board".into()); }
        if self.cursor >= self.timeline.len() {
            return invalid(format!("cursor {} past timeline of {}", self.cursor, self.timeline.len()));
        }
        for (i, e) in self.timeline.iter().enumerate() {
            if !e.board.is_well_formed() || e.board.filled() != i || e.board.side_to_move() != e.next_to_move {
                return invalid(format!("timeline entry {} is inconsistent", i));
            }
        }
        // Each step adds exactly one piece, by the side to move, to a live game.
        for (i, pair) in self.timeline.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if evaluate(&prev.board).is_terminal() {
                return invalid(format!("timeline continues after the game ended at entry {}", i));
            }
            let changed: Vec<usize> = (0..CELLS).filter(|&c| prev.board.get(c) != next.board.get(c)).collect();
            let legal = match changed.as_slice() {
                [c] => prev.board.is_empty_at(*c) && next.board.get(*c) == Cell::from(prev.next_to_move),
                _ => false,
            };
            if !legal {
                return invalid(format!("entry {} is not one move after entry {}", i + 1, i));
            }
        }
        let at = &self.timeline[self.cursor];
        if at.board != self.board || at.next_to_move != self.to_move() {
            return invalid("board does not match the timeline cursor".into());
        }
        Ok(())
    }
}

/// Load/save contract. The storage mechanism is the host's business.
pub trait Store {
    fn load(&self) -> Result<Option<Snapshot>, PersistError>;
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError>;
}

/// Keeps the serialized snapshot in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_raw(raw: impl Into<String>) -> Self { Self { raw: Some(raw.into()) } }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        match &self.raw {
            Some(s) => Ok(Some(serde_json::from_str(s)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        self.raw = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }
}

/// One pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self { Self { path: path.as_ref().to_path_buf() } }

    pub fn path(&self) -> &Path { &self.path }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        if !self.path.exists() { return Ok(None); }
        let s = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&s)?))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() { fs::create_dir_all(dir)?; }
        }
        fs::write(&self.path, serde_json::to_string_pretty(snapshot)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_valid() {
        assert!(Snapshot::default().validate().is_ok());
    }

    #[test]
    fn json_shape_uses_camel_case() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        assert_eq!(json["xIsNext"], serde_json::json!(true));
        assert_eq!(json["timeline"][0]["nextToMove"], serde_json::json!("X"));
        assert_eq!(json["difficulty"], serde_json::json!("medium"));
        assert_eq!(json["scores"]["O"], serde_json::json!(0));
    }
}
