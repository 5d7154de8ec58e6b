//! Tests for settings loading.

use std::io::Write;
use std::time::Duration;

use monkey_banana::{Mark, Settings};

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.starting_mark(), &Mark::Monkey);
    assert_eq!(settings.tick_rate(), Duration::from_millis(33));
    assert!(settings.celebration().shows_motion());
    assert_eq!(settings.celebration().clear_after(), Duration::from_secs(3));
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
}

#[test]
fn test_partial_override() {
    let settings = Settings::from_toml(
        r#"
        starting_mark = "banana"

        [celebration]
        reduced_motion = true
        "#,
    )
    .unwrap();

    assert_eq!(settings.starting_mark(), &Mark::Banana);
    assert_eq!(settings.tick_rate(), Duration::from_millis(33));
    assert!(*settings.celebration().enabled());
    assert!(!settings.celebration().shows_motion());
    assert_eq!(settings.celebration().clear_after(), Duration::from_secs(3));
}

#[test]
fn test_bad_mark_is_error() {
    let err = Settings::from_toml(r#"starting_mark = "gorilla""#).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_rate_ms = 50").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.tick_rate(), Duration::from_millis(50));
    assert_eq!(settings.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Settings::discover(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
