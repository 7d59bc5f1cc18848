use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solver::selector::Difficulty;
use crate::types::Player;

/// Settings for one interactive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Player placing the first mark.
    pub first: Player,
    /// Side typed in by a person; `None` lets the computer play both sides.
    pub human: Option<Player>,
    pub difficulty: Difficulty,
    /// Fixed seed for the computer's generator; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        // The human plays O and moves first against a perfect opponent.
        Self {
            first: Player::O,
            human: Some(Player::O),
            difficulty: Difficulty::Impossible,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a [`MatchConfig`] from a JSON file. Missing fields take defaults.
pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> Result<MatchConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
