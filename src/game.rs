use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::engine::apply::make_move;
use crate::error::{Error, Result};
use crate::render;
use crate::rules::{is_terminal, outcome, whose_turn, winner};
use crate::solver::selector::{Difficulty, MoveSelector};
use crate::types::{Outcome, Player, Position};

/// A game in progress: the board plus the result of the latest move, kept
/// together with the player it was measured for.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    last: Option<(Player, Outcome)>,
}

impl Game {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(first),
            last: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next.
    #[inline]
    pub fn turn(&self) -> Player {
        whose_turn(&self.board)
    }

    #[inline]
    pub fn outcome_for(&self, player: Player) -> Outcome {
        outcome(&self.board, player)
    }

    /// The mover of the latest move and the outcome from their side.
    #[inline]
    pub fn last_result(&self) -> Option<(Player, Outcome)> {
        self.last
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        is_terminal(&self.board)
    }

    /// Place the mark of the player to move at `pos` and classify the board
    /// for that player.
    pub fn play(&mut self, pos: Position) -> Result<Outcome> {
        if self.is_over() {
            return Err(Error::InvalidState("the game is already over"));
        }
        let undo = make_move(&mut self.board, pos)?;
        let result = outcome(&self.board, undo.player);
        self.last = Some((undo.player, result));
        Ok(result)
    }

    /// Human readable status, measured for the latest mover.
    pub fn status(&self) -> String {
        match self.last {
            Some((player, result)) => render::status(result, player),
            None => render::status(Outcome::Undecided, self.turn()),
        }
    }
}

/// Difficulty used for each side in a computer-versus-computer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lineup {
    pub x: Difficulty,
    pub o: Difficulty,
}

impl Lineup {
    #[inline]
    pub fn for_player(&self, player: Player) -> Difficulty {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: Player,
    pub plies: u8,
    pub winner: Option<Player>,
}

/// Play a game to the end with both sides driven by `selector`.
pub fn simulate<R: Rng>(
    first: Player,
    lineup: Lineup,
    selector: &mut MoveSelector<R>,
) -> Result<GameRecord> {
    let mut game = Game::new(first);
    while !game.is_over() {
        let mover = game.turn();
        let pos = selector.select(game.board(), lineup.for_player(mover))?;
        game.play(pos)?;
    }
    let board = game.board();
    Ok(GameRecord {
        first,
        plies: board.filled_count(),
        winner: winner(board),
    })
}
