//! Tests for loading the TOML config from disk.

use std::io::Write;
use tictactoe_timeline_tui::TimelineConfig;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TimelineConfig::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TimelineConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_reversed = true").expect("write");
    writeln!(file, "log_file = \"game.log\"").expect("write");

    let config = TimelineConfig::load(file.path()).expect("valid config");
    assert!(*config.history_reversed());
    assert_eq!(config.log_file(), "game.log");
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_reversed = [").expect("write");

    let err = TimelineConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
