//! Text presentation: board art, coordinates, status lines and menu text.
//!
//! Nothing in the rules or search layers depends on this module.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::Error;
use crate::types::{Cell, Outcome, Player, Position, SIDE};

pub const INSTRUCTIONS: &str = "Welcome to Noughts and Crosses

WINNING CONDITIONS
- Place three of your counters ('O' or 'X') in a line
- The line can be horizontal, vertical, or diagonal

HOW TO PLAY
- You will be prompted to place your piece '>'
- Enter the coordinates of the cell in which you would like to place it
- e.g. B1 is the middle cell
";

pub const DIFFICULTY_MENU: &str = "Please select your difficulty level (1, 2, 3, or 4).
1. Easy
2. Medium
3. Hard
4. Impossible
";

const RULE: &str = "- - - - - - -";
const INDENT: &str = "\t";

/// The grid with column letters and row numbers:
///
/// ```text
///     A   B   C
///   - - - - - - -
/// 0 : X :   : O :
///   - - - - - - -
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{INDENT}    A   B   C")?;
        writeln!(f, "{INDENT}  {RULE}")?;
        for row in 0..SIDE {
            write!(f, "{INDENT}{row} ")?;
            for column in 0..SIDE {
                let cell = self.at(column, row).map_err(|_| fmt::Error)?;
                write!(f, ": {} ", cell.symbol())?;
            }
            writeln!(f, ":")?;
            writeln!(f, "{INDENT}  {RULE}")?;
        }
        writeln!(f)
    }
}

/// Rendered board art as an owned string.
pub fn board_art(board: &Board) -> String {
    board.to_string()
}

/// Compact row-major form, `.` for empty cells. Inverse of
/// [`Board::from_layout`].
pub fn layout(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|c| match c {
            Cell::Empty => '.',
            other => other.symbol(),
        })
        .collect()
}

/// Status line for `outcome` as seen by `player`.
pub fn status(outcome: Outcome, player: Player) -> String {
    match outcome {
        Outcome::Win => format!("Player {player} has won!"),
        Outcome::Loss => format!("Player {} has won!", player.opponent()),
        Outcome::Draw => "You drew!".to_string(),
        Outcome::Undecided => "The game is in progress".to_string(),
    }
}

/// Parses coordinates such as `B1`: a column letter `A`-`C` (any case)
/// followed by a row digit `0`-`2`.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || Error::InvalidCoordinate(input.to_string());

        let mut chars = input.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let column = match letter.to_ascii_uppercase() {
            'A' => 0,
            'B' => 1,
            'C' => 2,
            _ => return Err(invalid()),
        };
        let row = digit
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .filter(|&d| d < SIDE)
            .ok_or_else(invalid)?;
        Position::new(column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_has_header_and_marks() {
        let board = Board::from_layout(Player::X, "X.O......").expect("layout");
        let art = board_art(&board);
        assert!(art.contains("    A   B   C"));
        assert!(art.contains("0 : X :   : O :"));
        assert!(art.contains("2 :   :   :   :"));
    }

    #[test]
    fn coordinates_parse_case_insensitively() {
        assert_eq!("B1".parse::<Position>().unwrap(), Position::new(1, 1).unwrap());
        assert_eq!("c0".parse::<Position>().unwrap(), Position::new(2, 0).unwrap());
        assert!(matches!("D1".parse::<Position>(), Err(Error::InvalidCoordinate(_))));
        assert!(matches!("A3".parse::<Position>(), Err(Error::InvalidCoordinate(_))));
        assert!(matches!("A".parse::<Position>(), Err(Error::InvalidCoordinate(_))));
        assert!(matches!("A11".parse::<Position>(), Err(Error::InvalidCoordinate(_))));
    }

    #[test]
    fn status_reads_from_the_named_player() {
        assert_eq!(status(Outcome::Win, Player::O), "Player O has won!");
        assert_eq!(status(Outcome::Loss, Player::O), "Player X has won!");
        assert_eq!(status(Outcome::Draw, Player::X), "You drew!");
    }
}
