use nations::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);

    assert_eq!(config.pagination.countries_page_size, 5);
    assert_eq!(config.pagination.country_stats_page_size, 5);
    assert_eq!(config.pagination.overview_page_size, 5);

    assert_eq!(config.logging.level, "info");
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("nations/config.toml"));
}

/// Test validation passes for the default config.
#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

/// Test that a missing file yields the defaults.
#[test]
fn test_missing_file_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Test that a partial file keeps defaults for unset keys.
#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://nations.example.com/api"

[pagination]
overview_page_size = 25
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://nations.example.com/api");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.pagination.overview_page_size, 25);
    assert_eq!(config.pagination.countries_page_size, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_full_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "http://10.0.0.2:9000/api"
timeout_seconds = 10
connect_timeout_seconds = 2

[pagination]
countries_page_size = 10
country_stats_page_size = 20
overview_page_size = 50

[logging]
level = "nations=debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 2);
    assert_eq!(config.pagination.country_stats_page_size, 20);
    assert_eq!(config.logging.level, "nations=debug");
}

/// Test that malformed TOML is reported as a parse error with the path.
#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api\nbase_url = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

/// Test validation rejects a base URL that does not parse.
#[test]
fn test_validation_fails_invalid_url() {
    let mut config = Config::default();
    config.api.base_url = "localhost:8080 api".to_string();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test validation rejects non-http schemes.
#[test]
fn test_validation_fails_non_http_scheme() {
    let mut config = Config::default();
    config.api.base_url = "ftp://nations.example.com".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("http or https"));
}

/// Test validation rejects a zero page size and names the key.
#[test]
fn test_validation_fails_zero_page_size() {
    let mut config = Config::default();
    config.pagination.country_stats_page_size = 0;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("pagination.country_stats_page_size"));
}

#[test]
fn test_validation_fails_zero_timeout() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;

    assert!(config.validate().is_err());
}

/// Test that invalid values in the file fail at load time.
#[test]
fn test_load_validates_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[pagination]\ncountries_page_size = 0\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
