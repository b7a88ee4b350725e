// Tests for SettingsStore
// Test cases:
// - Missing file loads defaults
// - Saved settings persist across store reload
// - Profiles without overrides inherit the normal configuration
// - Corrupt file reports a load error

use super::*;
use tempfile::TempDir;

/// Helper to create a store with a temporary config path
fn create_test_store() -> (SettingsStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.json");
    let store = SettingsStore::new(config_path);
    (store, temp_dir)
}

#[test]
fn test_missing_file_loads_defaults() {
    let (mut store, _temp_dir) = create_test_store();

    store.load().unwrap();

    assert_eq!(
        store.settings_for(&ProfileId::normal()),
        NumberProcessingSettings::default()
    );
    assert!(store.profile_names().is_empty());
}

#[test]
fn test_settings_persist_across_reload() {
    let (mut store, temp_dir) = create_test_store();
    let normal = NumberProcessingSettings {
        auto_enable: true,
        min_run_length: 4,
    };
    let reading = NumberProcessingSettings {
        auto_enable: false,
        min_run_length: 6,
    };

    store.save_settings(&ProfileId::normal(), normal).unwrap();
    store
        .save_settings(&ProfileId::named("reading"), reading)
        .unwrap();

    let mut reloaded = SettingsStore::new(temp_dir.path().join("settings.json"));
    reloaded.load().unwrap();

    assert_eq!(reloaded.settings_for(&ProfileId::normal()), normal);
    assert_eq!(reloaded.settings_for(&ProfileId::named("reading")), reading);
    assert_eq!(reloaded.profile_names(), vec!["reading"]);
}

#[test]
fn test_profile_without_override_inherits_normal() {
    let (mut store, _temp_dir) = create_test_store();
    let normal = NumberProcessingSettings {
        auto_enable: true,
        min_run_length: 3,
    };
    store.save_settings(&ProfileId::normal(), normal).unwrap();

    assert_eq!(store.settings_for(&ProfileId::named("unknown")), normal);
}

#[test]
fn test_save_creates_parent_directory_and_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("settings.json");
    let mut store = SettingsStore::new(config_path.clone());

    store
        .save_settings(&ProfileId::normal(), NumberProcessingSettings::default())
        .unwrap();

    assert!(config_path.exists());
    assert!(!config_path.with_extension("tmp").exists());
}

#[test]
fn test_corrupt_file_reports_load_error() {
    let (mut store, _temp_dir) = create_test_store();
    std::fs::write(store.config_path(), "not json").unwrap();

    let result = store.load();

    assert!(matches!(result, Err(SettingsError::LoadError(_))));
}

#[test]
fn test_partial_document_uses_defaults() {
    let (mut store, _temp_dir) = create_test_store();
    std::fs::write(
        store.config_path(),
        r#"{"profiles": {"excel": {"userMinLen": 3}}}"#,
    )
    .unwrap();

    store.load().unwrap();

    assert_eq!(
        store.settings_for(&ProfileId::normal()),
        NumberProcessingSettings::default()
    );
    assert_eq!(
        store.settings_for(&ProfileId::named("excel")).min_run_length,
        3
    );
}
