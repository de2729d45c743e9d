pub mod status;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use status::{evaluate, GameStatus, LINES};

pub const CELLS: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self { Player::X => Player::O, Player::O => Player::X }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Player::X => "X", Player::O => "O" })
    }
}

/// A single square. Serialized as `null`, `"X"` or `"O"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool { self == Cell::Empty }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Self {
        match p { Player::X => Cell::X, Player::O => Cell::O }
    }
}

impl From<Option<Player>> for Cell {
    fn from(p: Option<Player>) -> Self { p.map_or(Cell::Empty, Cell::from) }
}

impl From<Cell> for Option<Player> {
    fn from(c: Cell) -> Self { c.player() }
}

/// Row-major 3x3 board. A `Copy` value: applying a move yields a new board,
/// so snapshots never alias the live game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Cell; CELLS]);

impl Board {
    pub fn new() -> Self { Self::default() }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self { Self(cells) }

    /// Parse a 9-cell layout such as `"XX.OO...."` or `"XX./OO./..."`.
    /// `.`, `_`, `-` and space are empty; `/` and newlines separate rows.
    pub fn parse(layout: &str) -> Option<Self> {
        let mut cells = [Cell::Empty; CELLS];
        let mut i = 0usize;
        for ch in layout.chars().filter(|c| *c != '\n' && *c != '/') {
            if i >= CELLS { return None; }
            cells[i] = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' | ' ' => Cell::Empty,
                _ => return None,
            };
            i += 1;
        }
        if i == CELLS { Some(Self(cells)) } else { None }
    }

    pub fn cells(&self) -> &[Cell; CELLS] { &self.0 }

    pub fn get(&self, index: usize) -> Cell { self.0[index] }

    pub fn is_empty_at(&self, index: usize) -> bool { self.0[index].is_empty() }

    /// Copy of this board with `player` placed on `index`.
    pub fn with(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.0[index] = player.into();
        next
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.0[i].is_empty()).collect()
    }

    pub fn filled(&self) -> usize {
        self.0.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.0.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool { self.filled() == CELLS }

    /// Whose turn it is by parity: even number of filled cells means X.
    pub fn side_to_move(&self) -> Player {
        if self.filled() % 2 == 0 { Player::X } else { Player::O }
    }

    /// True if the piece counts could come from X-first alternating play.
    pub fn is_well_formed(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 { writeln!(f, "---+---+---")?; }
            for col in 0..3 {
                let i = row * 3 + col;
                let s = match self.0[i] {
                    Cell::X => "X".to_string(),
                    Cell::O => "O".to_string(),
                    Cell::Empty => i.to_string(),
                };
                if col > 0 { write!(f, "|")?; }
                write!(f, " {} ", s)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
