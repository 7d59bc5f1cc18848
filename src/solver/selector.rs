use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{Error, Result};
use crate::rng::process_rng;
use crate::rules::{actions, is_terminal};
use crate::solver::minimax::best_move;
use crate::types::Position;

/// Strength of the computer player.
///
/// Each level carries the percentage chance that the optimal move is played
/// instead of a uniformly random legal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    #[inline]
    pub const fn percentage(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 30,
            Difficulty::Hard => 80,
            Difficulty::Impossible => 100,
        }
    }

    /// Look a level up by its exact percentage.
    pub fn from_percentage(p: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.percentage() == p)
            .ok_or_else(|| Error::UnsupportedDifficulty(format!("{p}%")))
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the level names (any case) and the menu numbers `1`..=`4`.
impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            "4" | "impossible" => Ok(Difficulty::Impossible),
            _ => Err(Error::UnsupportedDifficulty(s.trim().to_string())),
        }
    }
}

/// Picks computer moves, mixing optimal and random play by difficulty.
///
/// The generator lives as long as the selector; create one selector per
/// process (or per seeded game) rather than one per move.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = Pcg64> {
    rng: R,
}

impl MoveSelector<Pcg64> {
    /// Selector backed by a generator seeded once from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(process_rng())
    }

    /// Reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose a move for the player to move on `board`.
    ///
    /// Easy never searches and Impossible always does. Medium and Hard draw
    /// once from `0..=100` and search when the draw is at most their
    /// percentage.
    pub fn select(&mut self, board: &Board, difficulty: Difficulty) -> Result<Position> {
        let optimal = match difficulty {
            Difficulty::Easy => false,
            Difficulty::Impossible => true,
            level => {
                let roll: u8 = self.rng.gen_range(0..=100);
                let hit = roll <= level.percentage();
                tracing::debug!(%level, roll, hit, "difficulty roll");
                hit
            }
        };

        let pos = if optimal {
            best_move(board)?
        } else {
            self.random_move(board)?
        };
        tracing::debug!(%difficulty, %pos, optimal, "move selected");
        Ok(pos)
    }

    /// A uniformly random legal move.
    pub fn random_move(&mut self, board: &Board) -> Result<Position> {
        if is_terminal(board) {
            return Err(Error::InvalidState("no move to pick on a finished board"));
        }
        actions(board)
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::InvalidState("no move to pick on a finished board"))
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
