use std::time::Duration;

use mindcare_core::storage_keys::USER_PROGRESS;
use mindcare_assistant::config::{AssistantConfig, load_config_from, save_config_to};
use mindcare_assistant::telemetry::LogFormat;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, AssistantConfig::default());
    assert_eq!(config.typing_delay(), Duration::from_millis(1500));
    assert_eq!(config.progress_key, USER_PROGRESS);
    assert_eq!(config.suggestion_limit, 4);
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = AssistantConfig {
        typing_delay_ms: 250,
        data_dir: Some(dir.path().join("data")),
        fallback_seed: Some(9),
        log_format: LogFormat::Json,
        ..AssistantConfig::default()
    };

    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.data_dir().unwrap(), dir.path().join("data"));
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "typing_delay_secs": 0.75, "suggestion_limit": 3 }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.typing_delay_ms, 750);
    assert_eq!(config.suggestion_limit, 3);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn file_store_lives_in_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = AssistantConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..AssistantConfig::default()
    };
    let store = config.file_store().unwrap();
    assert_eq!(store.root(), dir.path());
}
