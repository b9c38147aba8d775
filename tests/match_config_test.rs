//! Tests for loading match configuration.

use botany::{BotKind, MatchConfig, OutputFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
bot_a = "tactical"
bot_b = "cycler"
output = "json"
"#,
    );

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.bot_a(), BotKind::Tactical);
    assert_eq!(*config.bot_b(), BotKind::Cycler);
    assert_eq!(*config.output(), OutputFormat::Json);
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("bot_b = \"last\"\n");

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.bot_a(), BotKind::First);
    assert_eq!(*config.bot_b(), BotKind::Last);
    assert_eq!(*config.output(), OutputFormat::Text);
}

#[test]
fn test_unknown_bot_is_rejected() {
    let file = write_config("bot_a = \"oracle\"\n");

    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let file = write_config("bot_c = \"first\"\n");
    assert!(MatchConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_overrides_win() {
    let config = MatchConfig::new(BotKind::First, BotKind::First).with_overrides(
        None,
        Some(BotKind::Auditor),
        Some(OutputFormat::Json),
    );
    assert_eq!(*config.bot_a(), BotKind::First);
    assert_eq!(*config.bot_b(), BotKind::Auditor);
    assert_eq!(*config.output(), OutputFormat::Json);
}
