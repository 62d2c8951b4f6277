//! Configuration loader tests

use remedy_domain::Error;
use remedy_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use remedy_infrastructure::constants::DEFAULT_LOG_LEVEL;
use std::fs;
use tempfile::TempDir;

/// Loader isolated from the process environment and any user config file
fn isolated_loader(dir: &TempDir, file: &str, prefix: &str) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(dir.path().join(file))
        .with_env_prefix(prefix)
}

#[test]
fn test_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let config = isolated_loader(&dir, "missing.toml", "REMEDY_TEST_DEFAULTS")
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.diff.context_lines, 3);
    assert!(!config.cache.is_bounded());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("remedy.toml"),
        "[diff]\ncontext_lines = 1\n\n[cache]\ntime_to_live_secs = 60\n",
    )
    .unwrap();

    let config = isolated_loader(&dir, "remedy.toml", "REMEDY_TEST_FILE")
        .load()
        .unwrap();

    assert_eq!(config.diff.context_lines, 1);
    assert_eq!(config.cache.time_to_live_secs, Some(60));
    assert_eq!(config.cache.max_capacity, None);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("remedy.toml"), "[diff]\ncontext_lines = 1\n").unwrap();
    // SAFETY: the variables use a prefix no other test reads
    unsafe {
        std::env::set_var("REMEDY_TEST_ENV_DIFF__CONTEXT_LINES", "7");
        std::env::set_var("REMEDY_TEST_ENV_CACHE__MAX_CAPACITY", "10");
    }

    let config = isolated_loader(&dir, "remedy.toml", "REMEDY_TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.diff.context_lines, 7);
    assert_eq!(config.cache.max_capacity, Some(10));
}

#[test]
fn test_invalid_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("remedy.toml"), "[diff]\ncontext_lines = \"many\"\n").unwrap();

    let result = isolated_loader(&dir, "remedy.toml", "REMEDY_TEST_INVALID").load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_loaded_values_are_validated() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("remedy.toml"), "[diff]\ncontext_lines = 500\n").unwrap();

    match isolated_loader(&dir, "remedy.toml", "REMEDY_TEST_VALIDATED").load() {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("context_lines")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_validation_rules() {
    assert!(validate_app_config(&AppConfig::default()).is_ok());

    let mut config = AppConfig::default();
    config.cache.time_to_live_secs = Some(0);
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.cache.max_capacity = Some(0);
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.diff.context_lines = 100;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let mut original = AppConfig::default();
    original.diff.context_lines = 5;
    original.cache.max_capacity = Some(128);
    original.logging.json_format = true;

    let loader = isolated_loader(&dir, "saved.toml", "REMEDY_TEST_SAVE");
    loader.save_to_file(&original, &path).unwrap();
    assert_eq!(loader.config_path(), Some(path.as_path()));

    assert_eq!(loader.load().unwrap(), original);
}
