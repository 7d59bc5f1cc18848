pub mod minimax;
pub mod selector;

pub use minimax::{best_move, max_value, min_value, move_values, search_root, SearchResult};
pub use selector::{Difficulty, MoveSelector};
