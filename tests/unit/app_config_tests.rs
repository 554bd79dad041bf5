/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use folio::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_config_default_shouldHaveExpectedValues() {
    let config = Config::default();
    assert_eq!(config.content_dir, "content");
    assert!(config.output.is_none());
    assert!(!config.pretty);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test saving and reloading a configuration file
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let config = Config {
        content_dir: "site/content".to_string(),
        output: Some("dist/page.json".to_string()),
        pretty: true,
        log_level: LogLevel::Debug,
    };
    config.save_to_file(&config_path)?;

    let loaded = Config::from_file(&config_path)?;
    assert_eq!(loaded, config);
    Ok(())
}

/// Test loading a config with only some fields present
#[test]
fn test_config_load_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"pretty": true}"#,
    )?;

    let config = Config::from_file(&config_path)?;
    assert!(config.pretty);
    assert_eq!(config.content_dir, "content");
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that an invalid config file fails to load
#[test]
fn test_config_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "conf.json", "not json")?;

    assert!(Config::from_file(&config_path).is_err());
    Ok(())
}

/// Test validation of an empty content directory setting
#[test]
fn test_config_validate_withBlankContentDir_shouldFail() {
    let config = Config {
        content_dir: String::new(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}
