use crate::board::Board;
use crate::types::{Outcome, Player, Position};

/// The eight winning lines as row-major cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // leading diagonal
    [0, 4, 8],
    // opposite diagonal
    [2, 4, 6],
];

/// Empty cells of `board`, ascending by cell index.
///
/// The order is part of the contract: the search breaks ties by it.
pub fn actions(board: &Board) -> Vec<Position> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(pos, _)| pos)
        .collect()
}

/// The player to move, derived from the number of marks placed.
///
/// Assumes strict alternation since the board was created.
#[inline]
pub fn whose_turn(board: &Board) -> Player {
    if board.filled_count() % 2 == 0 {
        board.first_player()
    } else {
        board.first_player().opponent()
    }
}

/// True if `player` owns all three cells of any line.
///
/// Does not assume only one player can have a line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

/// Classify `board` from `player`'s perspective.
///
/// Lines are checked before fullness, so a full board with a line is a
/// win or loss, never a draw.
pub fn outcome(board: &Board, player: Player) -> Outcome {
    if has_won(board, player) {
        Outcome::Win
    } else if has_won(board, player.opponent()) {
        Outcome::Loss
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

/// A board is terminal when it is not undecided. The perspective does not
/// matter for this question.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    outcome(board, Player::X).is_terminal()
}

/// The player holding a line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    Player::both().into_iter().find(|&p| has_won(board, p))
}
