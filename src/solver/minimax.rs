use serde::Serialize;

use crate::board::Board;
use crate::engine::apply::{apply_move, make_move, unmake_move};
use crate::engine::score::{utility, WIN_SCORE};
use crate::error::{Error, Result};
use crate::rules::{actions, has_won, is_terminal, whose_turn};
use crate::types::{Player, Position};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub best_move: Position,
    /// Minimax value of `best_move` for the player to move.
    pub value: i32,
    /// Boards visited, root children included.
    pub nodes: u64,
}

/// Best value `maximizer` can force when it is `maximizer`'s turn to choose.
///
/// `board` is probed in place and restored before returning, on the error
/// path too.
pub fn max_value(board: &mut Board, maximizer: Player) -> Result<i32> {
    let mut nodes = 0u64;
    max_node(board, maximizer, &mut nodes)
}

/// Value `maximizer` is held to when the opponent chooses on `board`.
pub fn min_value(board: &mut Board, maximizer: Player) -> Result<i32> {
    let mut nodes = 0u64;
    min_node(board, maximizer, &mut nodes)
}

fn max_node(board: &mut Board, maximizer: Player, nodes: &mut u64) -> Result<i32> {
    *nodes += 1;
    if is_terminal(board) {
        return utility(board, maximizer);
    }

    let mut best = i32::MIN;
    for pos in actions(board) {
        let undo = make_move(board, pos)?;
        let value = min_node(board, maximizer, nodes);
        unmake_move(board, undo);
        best = best.max(value?);
    }
    Ok(best)
}

fn min_node(board: &mut Board, maximizer: Player, nodes: &mut u64) -> Result<i32> {
    *nodes += 1;
    if is_terminal(board) {
        return utility(board, maximizer);
    }

    let mut worst = i32::MAX;
    for pos in actions(board) {
        let undo = make_move(board, pos)?;
        let value = max_node(board, maximizer, nodes);
        unmake_move(board, undo);
        worst = worst.min(value?);
    }
    Ok(worst)
}

fn ensure_searchable(board: &Board) -> Result<Vec<Position>> {
    let moves = actions(board);
    if moves.is_empty() || is_terminal(board) {
        return Err(Error::InvalidState("no move to search for on a finished board"));
    }
    Ok(moves)
}

/// Minimax value of every legal move for the player to move, in
/// [`actions`] order.
pub fn move_values(board: &Board) -> Result<Vec<(Position, i32)>> {
    let moves = ensure_searchable(board)?;
    let maximizer = whose_turn(board);
    let mut nodes = 0u64;
    moves
        .into_iter()
        .map(|pos| {
            let mut child = apply_move(board, pos)?;
            min_node(&mut child, maximizer, &mut nodes).map(|v| (pos, v))
        })
        .collect()
}

/// Exhaustive root search for the player to move.
///
/// A move that completes a line is taken straight away (first one in
/// [`actions`] order), even when an earlier move scores the same +10 by
/// winning later; plain utility cannot tell the two apart. Otherwise every
/// move is scored with [`min_value`] and the first move with the greatest
/// value wins; later moves need a strictly greater value to replace it.
pub fn search_root(board: &Board) -> Result<SearchResult> {
    let moves = ensure_searchable(board)?;
    let maximizer = whose_turn(board);
    for (probed, &pos) in (1u64..).zip(&moves) {
        let child = apply_move(board, pos)?;
        if has_won(&child, maximizer) {
            tracing::trace!(%pos, nodes = probed, "immediate win");
            return Ok(SearchResult {
                best_move: pos,
                value: WIN_SCORE,
                nodes: probed,
            });
        }
    }

    let mut nodes = 0u64;
    let mut best_move = moves[0];
    let mut best_value = i32::MIN;
    for pos in moves {
        // each root child is probed on its own copy
        let mut child = apply_move(board, pos)?;
        let value = min_node(&mut child, maximizer, &mut nodes)?;
        if value > best_value {
            best_move = pos;
            best_value = value;
        }
    }

    tracing::trace!(%best_move, best_value, nodes, "minimax search complete");
    Ok(SearchResult {
        best_move,
        value: best_value,
        nodes,
    })
}

/// The optimal move for the player to move on `board`.
///
/// Fails with `InvalidState` on a finished board.
#[inline]
pub fn best_move(board: &Board) -> Result<Position> {
    search_root(board).map(|res| res.best_move)
}
