use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::error::{GameError, Result};

/// Board snapshot taken right after a move. Entry 0 of every timeline is the
/// empty board with X to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub board: Board,
    pub next_to_move: Player,
}

impl HistoryEntry {
    pub fn start() -> Self { Self { board: Board::new(), next_to_move: Player::X } }
}

impl Default for HistoryEntry {
    fn default() -> Self { Self::start() }
}

/// Append-only list of snapshots with a cursor. Recording after a rewind
/// discards the entries past the cursor; there is no redo once a new line
/// has started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl Default for Timeline {
    fn default() -> Self { Self::new() }
}

impl Timeline {
    pub fn new() -> Self { Self { entries: vec![HistoryEntry::start()], cursor: 0 } }

    /// Rebuild from persisted parts. `None` unless the cursor points at an entry.
    pub fn from_parts(entries: Vec<HistoryEntry>, cursor: usize) -> Option<Self> {
        if cursor >= entries.len() { return None; }
        Some(Self { entries, cursor })
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn cursor(&self) -> usize { self.cursor }

    pub fn is_at_end(&self) -> bool { self.cursor + 1 == self.entries.len() }

    pub fn current(&self) -> &HistoryEntry { &self.entries[self.cursor] }

    pub fn entries(&self) -> &[HistoryEntry] { &self.entries }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    pub fn jump(&mut self, index: usize) -> Result<HistoryEntry> {
        let entry = *self.entries.get(index).ok_or(GameError::OutOfRange { index, len: self.entries.len() })?;
        self.cursor = index;
        Ok(entry)
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::start());
        self.cursor = 0;
    }
}
