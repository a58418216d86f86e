mod common;

use common::raw_config;
use moviedeck::config::{AuthType, Config, ConfigError, CredentialStatus};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.catalog.auth_type(), AuthType::ApiKey);
    assert_eq!(config.catalog.api_key_env, "TMDB_API_KEY");
    assert_eq!(config.catalog.trending_window, "week");
    assert_eq!(config.catalog.timeout_seconds, 10);
    assert_eq!(config.catalog.connect_timeout_seconds, 5);
    assert!(config.catalog.api_key.is_none());

    assert_eq!(config.ui.page_size, 8);
    assert_eq!(config.ui.debounce_ms, 500);
    assert!(!config.ui.spotlight);
    assert!(!config.ui.dark_mode);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviedeck/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let (_dir, path) = raw_config(
        r#"
[catalog]
api_key = "abc123"
language = "fr-FR"

[ui]
spotlight = true
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.catalog.language.as_deref(), Some("fr-FR"));
    assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
    assert!(config.ui.spotlight);
    assert_eq!(config.ui.page_size, 8);

    match config.catalog.resolve_credential() {
        CredentialStatus::Configured(key) => assert_eq!(key.expose(), "abc123"),
        other => panic!("expected configured credential, got {:?}", other),
    }
}

#[test]
fn test_bearer_auth_type_from_file() {
    let (_dir, path) = raw_config(
        r#"
[catalog]
auth_type = "bearer"
api_key = "token"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.auth_type(), AuthType::Bearer);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = raw_config("[catalog\nbase_url = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let (_dir, path) = raw_config(
        r#"
[catalog]
base_url = "ftp://example.com"
"#,
    );
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("catalog.base_url"));
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_unknown_trending_window() {
    let mut config = Config::default();
    config.catalog.trending_window = "month".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("trending_window"));
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_page_size() {
    let (_dir, path) = raw_config("[ui]\npage_size = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Config validation failed: ui.page_size must be greater than zero"
    );
}
