//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), env_from(&[]));
    assert_eq!(reloaded.api_url, config.api_url);
    assert_eq!(reloaded.alert_timeout_ms, 15_000);
    assert_eq!(reloaded.events_per_page, 25);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::from_sources(FileConfig::default(), env_from(&[]));
    assert_eq!(config.api_url, "https://api.listenbrainz.org/1");
    assert_eq!(config.theme, "auto");
    assert!(config.enable_tui);
    assert_eq!(config.alert_timeout(), Duration::from_secs(15));
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
        api_url = "http://localhost:8100/1"
        theme = "nord"
        alert_timeout_ms = 5000
        events_per_page = 50

        [logging]
        level = "debug"
        file_enabled = true
        file_rotation = "hourly"
        "#,
    )
    .unwrap();

    let config = Config::from_sources(file, env_from(&[]));
    assert_eq!(config.api_url, "http://localhost:8100/1");
    assert_eq!(config.theme, "nord");
    assert_eq!(config.alert_timeout_ms, 5000);
    assert_eq!(config.events_per_page, 50);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(config.logging.file_prefix, "lbfeed");
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
        api_url = "http://from-file/1"
        alert_timeout_ms = 5000
        "#,
    )
    .unwrap();

    let config = Config::from_sources(
        file,
        env_from(&[
            ("LB_FEED_API_URL", "http://from-env/1"),
            ("LB_FEED_ALERT_TIMEOUT_MS", "2500"),
            ("LB_FEED_NO_TUI", "true"),
        ]),
    );
    assert_eq!(config.api_url, "http://from-env/1");
    assert_eq!(config.alert_timeout_ms, 2500);
    assert!(!config.enable_tui);
}

#[test]
fn test_unparseable_env_timeout_falls_back() {
    let config = Config::from_sources(
        FileConfig::default(),
        env_from(&[("LB_FEED_ALERT_TIMEOUT_MS", "soon")]),
    );
    assert_eq!(config.alert_timeout_ms, 15_000);
}

#[test]
fn test_zero_events_per_page_is_ignored() {
    let file: FileConfig = toml::from_str("events_per_page = 0").unwrap();
    let config = Config::from_sources(file, env_from(&[]));
    assert_eq!(config.events_per_page, 25);
}

#[test]
fn test_zero_alert_timeout_is_ignored() {
    let file: FileConfig = toml::from_str("alert_timeout_ms = 0").unwrap();
    let config = Config::from_sources(file, env_from(&[]));
    assert_eq!(config.alert_timeout_ms, 15_000);

    let file: FileConfig = toml::from_str("alert_timeout_ms = 4000").unwrap();
    let config = Config::from_sources(file, env_from(&[("LB_FEED_ALERT_TIMEOUT_MS", "0")]));
    assert_eq!(config.alert_timeout_ms, 4000);
}

#[test]
fn test_feed_options_carry_fallback_url() {
    let config = Config::default();
    let options = config.feed_options();
    assert_eq!(options.fallback_api_url, config.api_url);
    assert_eq!(options.events_per_page, 25);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}
