use crate::board::Board;
use crate::error::Result;
use crate::rules::whose_turn;
use crate::types::{Player, Position};

/// Record needed to take back a move made with [`make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub position: Position,
    pub player: Player,
}

/// Apply a move as a pure transform: returns a new board with the mark of
/// the player to move placed at `pos`.
///
/// Fails with `OccupiedCell` if the target is not empty.
pub fn apply_move(board: &Board, pos: Position) -> Result<Board> {
    let mut next = *board;
    make_move(&mut next, pos)?;
    Ok(next)
}

/// Place the mark of the player to move in place.
///
/// The board is untouched when this fails.
pub fn make_move(board: &mut Board, pos: Position) -> Result<Undo> {
    let player = whose_turn(board);
    board.place(pos, player)?;
    Ok(Undo {
        position: pos,
        player,
    })
}

/// Take back a move made with [`make_move`], restoring the board exactly.
#[inline]
pub fn unmake_move(board: &mut Board, undo: Undo) {
    debug_assert_eq!(board.get(undo.position), undo.player.mark());
    board.clear(undo.position);
}
