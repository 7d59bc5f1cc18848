use std::io::Write;

use noughts::config::{load_config_from_json, ConfigError, MatchConfig};
use noughts::{Difficulty, Player};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_match_the_console_game() {
    let cfg = MatchConfig::default();
    assert_eq!(cfg.first, Player::O);
    assert_eq!(cfg.human, Some(Player::O));
    assert_eq!(cfg.difficulty, Difficulty::Impossible);
    assert_eq!(cfg.seed, None);
}

#[test]
fn loads_full_config() {
    let file = write_temp(r#"{ "first": "X", "human": null, "difficulty": "hard", "seed": 12 }"#);
    let cfg = load_config_from_json(file.path()).expect("load");
    assert_eq!(
        cfg,
        MatchConfig {
            first: Player::X,
            human: None,
            difficulty: Difficulty::Hard,
            seed: Some(12),
        }
    );
}

#[test]
fn missing_fields_take_defaults() {
    let file = write_temp(r#"{ "difficulty": "easy" }"#);
    let cfg = load_config_from_json(file.path()).expect("load");
    assert_eq!(cfg.difficulty, Difficulty::Easy);
    assert_eq!(cfg.first, Player::O);
    assert_eq!(cfg.human, Some(Player::O));
}

#[test]
fn unknown_difficulty_is_a_json_error() {
    let file = write_temp(r#"{ "difficulty": "nightmare" }"#);
    let err = load_config_from_json(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "got {err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_config_from_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("absent.json"));
}
