use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Side length of the grid.
pub const SIDE: u8 = 3;

/// Number of cells on the board.
pub const NUM_CELLS: u8 = SIDE * SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places.
    #[inline]
    #[must_use]
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    #[inline]
    pub fn both() -> [Player; 2] {
        [Player::X, Player::O]
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this mark, `None` for an empty cell.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Result of a board, always read from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    Undecided,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }

    /// The same result seen by the other player.
    #[inline]
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            other => other,
        }
    }
}

/// A cell address. Both components are always in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    column: u8,
    row: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    column: u8,
    row: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = Error;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.column, raw.row)
    }
}

impl Position {
    /// Build a position, rejecting components outside the grid.
    pub fn new(column: u8, row: u8) -> Result<Self, Error> {
        if column < SIDE && row < SIDE {
            Ok(Self { column, row })
        } else {
            Err(Error::OutOfRange { column, row })
        }
    }

    /// Build from a row-major cell index (`row * 3 + column`).
    pub fn from_index(idx: u8) -> Result<Self, Error> {
        if idx < NUM_CELLS {
            Ok(Self {
                column: idx % SIDE,
                row: idx / SIDE,
            })
        } else {
            Err(Error::OutOfRange {
                column: idx % SIDE,
                row: idx / SIDE,
            })
        }
    }

    #[inline]
    pub fn column(self) -> u8 {
        self.column
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.row * SIDE + self.column)
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_CELLS).map(|idx| Position {
            column: idx % SIDE,
            row: idx / SIDE,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'A' + self.column), self.row)
    }
}
