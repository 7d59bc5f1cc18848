use crate::board::Board;
use crate::error::{Error, Result};
use crate::rules::outcome;
use crate::types::{Outcome, Player};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Utility of a terminal board for `maximizer`: +10 win, -10 loss, 0 draw.
///
/// An undecided board has no utility and is an `InvalidState` error.
#[inline]
pub fn utility(board: &Board, maximizer: Player) -> Result<i32> {
    match outcome(board, maximizer) {
        Outcome::Win => Ok(WIN_SCORE),
        Outcome::Loss => Ok(LOSS_SCORE),
        Outcome::Draw => Ok(DRAW_SCORE),
        Outcome::Undecided => Err(Error::InvalidState(
            "utility requires a terminal board (win, loss or draw)",
        )),
    }
}
