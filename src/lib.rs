#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod error;
pub mod board;
pub mod rules;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

pub mod config;
pub mod game;
pub mod logging;
pub mod render;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::{apply_move, make_move, unmake_move, Undo};
pub use crate::engine::score::utility;
pub use crate::error::{Error, Result};
pub use crate::game::{simulate, Game, GameRecord, Lineup};
pub use crate::rng::{process_rng, rng_for_game};
pub use crate::rules::{actions, has_won, is_terminal, outcome, whose_turn, winner};
pub use crate::solver::{best_move, search_root, Difficulty, MoveSelector, SearchResult};
pub use crate::types::{Cell, Outcome, Player, Position};
