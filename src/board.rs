use crate::error::{Error, Result};
use crate::rules::has_won;
use crate::types::{Cell, Player, Position, NUM_CELLS};

/// A 3x3 grid plus the record of who moved first.
///
/// `Board` is `Copy`: a copy carries every cell and the first mover, nothing
/// is shared between copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    // Cells 0..=8 laid out row-major (row*3 + column)
    cells: [Cell; NUM_CELLS as usize],
    first: Player,
}

impl Board {
    /// An empty board where `first` places the first mark.
    #[inline]
    pub fn new(first: Player) -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS as usize],
            first,
        }
    }

    /// Parse a 9-symbol row-major layout such as `"X.O..X..O"`.
    ///
    /// `X`/`x` and `O`/`o` are marks, `.`, `_`, `-` and space are empty cells.
    /// `/` and `|` row separators are ignored. The mark counts
    /// must be consistent with `first` having moved first, and at most one
    /// player may hold a line.
    pub fn from_layout(first: Player, layout: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; NUM_CELLS as usize];
        let mut n = 0usize;
        for ch in layout.chars().filter(|c| !matches!(c, '/' | '|')) {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' | ' ' => Cell::Empty,
                other => {
                    return Err(Error::MalformedBoard(format!(
                        "unexpected symbol '{other}'"
                    )))
                }
            };
            if n >= cells.len() {
                return Err(Error::MalformedBoard(format!(
                    "expected {NUM_CELLS} cells, got more"
                )));
            }
            cells[n] = cell;
            n += 1;
        }
        if n != cells.len() {
            return Err(Error::MalformedBoard(format!(
                "expected {NUM_CELLS} cells, got {n}"
            )));
        }

        let board = Self { cells, first };
        let lead = i32::from(board.count(first)) - i32::from(board.count(first.opponent()));
        if !(0..=1).contains(&lead) {
            return Err(Error::MalformedBoard(format!(
                "{} moved first but has {} marks against {}",
                first,
                board.count(first),
                board.count(first.opponent())
            )));
        }
        if has_won(&board, Player::X) && has_won(&board, Player::O) {
            return Err(Error::MalformedBoard("both players hold a line".to_string()));
        }
        Ok(board)
    }

    #[inline]
    pub fn first_player(&self) -> Player {
        self.first
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checked lookup by raw coordinates.
    pub fn at(&self, column: u8, row: u8) -> Result<Cell> {
        Position::new(column, row).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Place `player`'s mark on an empty cell.
    ///
    /// Turn order is not checked here, so only [`crate::engine::apply`]
    /// calls this with the player to move.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> Result<()> {
        if !self.is_empty(pos) {
            return Err(Error::OccupiedCell(pos));
        }
        self.cells[pos.index()] = player.mark();
        Ok(())
    }

    /// Reset a cell to empty. Only the probe/restore path uses this.
    #[inline]
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = Cell::Empty;
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; NUM_CELLS as usize] {
        &self.cells
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }

    /// Number of marks `player` has on the board.
    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        let mark = player.mark();
        self.cells.iter().fold(0, |n, &c| n + u8::from(c == mark))
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().fold(0, |n, c| n + u8::from(!c.is_empty()))
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == NUM_CELLS
    }
}
