//! Unit tests for configuration module

use std::io::Write;
use textlab_api::config::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.request_timeout_ms, 30000);
    assert!(settings.rate_limit.enabled);
    assert_eq!(settings.rate_limit.requests_per_second, 100);
    assert_eq!(settings.rate_limit.burst_size, 200);
    assert_eq!(settings.analysis.most_common_limit, 5);
    assert_eq!(settings.analysis.reading_speed_wpm, 200);
}

#[test]
fn test_load_without_file_uses_defaults() {
    let settings = Settings::load_from_path("does/not/exist.yaml").unwrap();
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.analysis.most_common_limit, 5);
}

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        "server:\n  port: 9090\nanalysis:\n  most_common_limit: 3\nseed:\n  path: data/seed.yaml"
    )
    .unwrap();

    let settings = Settings::load_from_path(file.path()).unwrap();

    assert_eq!(settings.server.port, 9090);
    assert_eq!(settings.analysis.most_common_limit, 3);
    assert_eq!(settings.seed.path.as_deref(), Some("data/seed.yaml"));
    // Untouched sections keep their defaults.
    assert_eq!(settings.rate_limit.requests_per_second, 100);
}

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "[server]\nport = 7070\n\n[logging]\nformat = \"compact\"").unwrap();

    let settings = Settings::load_from_path(file.path()).unwrap();

    assert_eq!(settings.server.port, 7070);
    assert_eq!(settings.logging.format, "compact");
}

#[test]
fn test_settings_validation_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_zero_reading_speed() {
    let mut settings = Settings::default();
    settings.analysis.reading_speed_wpm = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_zero_rate_limit_quota() {
    let mut settings = Settings::default();
    settings.rate_limit.burst_size = 0;
    assert!(settings.validate().is_err());

    settings.rate_limit.enabled = false;
    assert!(settings.validate().is_ok());
}
