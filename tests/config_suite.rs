use std::fs;

use payday_forecast::{
    config::{Config, ConfigManager},
    errors::ForecastError,
};
use tempfile::tempdir;

#[test]
fn config_is_created_lazily_and_persists() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().join("payday")).unwrap();

    assert!(!manager.path().exists());
    let mut config = manager.load().unwrap();
    assert_eq!(config.horizon_months, 12);
    assert_eq!(config.log_level, "info");

    config.horizon_months = 24;
    manager.save(&config).unwrap();
    assert!(manager.path().exists());

    let raw = fs::read_to_string(manager.path()).unwrap();
    assert!(raw.contains("\"horizonMonths\": 24"));
    assert!(raw.contains("\"logLevel\": \"info\""));

    let reopened = ConfigManager::with_base_dir(temp.path().join("payday")).unwrap();
    assert_eq!(reopened.load().unwrap(), config);
}

#[test]
fn corrupted_config_surfaces_serde_error() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    fs::write(manager.path(), "horizonMonths = 3").unwrap();

    let err = manager.load().unwrap_err();
    assert!(matches!(err, ForecastError::Serde(_)));
    assert!(err.to_string().starts_with("Serialization error"));
}

#[test]
fn overwrite_replaces_previous_settings() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();

    manager
        .save(&Config {
            horizon_months: 3,
            log_level: "debug".into(),
        })
        .unwrap();
    manager.save(&Config::default()).unwrap();

    assert_eq!(manager.load().unwrap(), Config::default());
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
