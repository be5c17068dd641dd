//! Integration tests for configuration loader
//!
//! Loads a config file end to end and builds the storage it selects.

use std::io::Write;

use sparta_infra::{build_storage, config};
use sparta_domain::{demo_workout, StorageBackend};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_toml_config_drives_storage_selection() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("drafts.db");
    let toml_content = format!(
        r#"
[storage]
backend = "sqlite"
path = "{}"
pool_size = 2

[session]
rest_seconds = 60
"#,
        db_path.display()
    );

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config loads");
    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.session.rest_seconds, 60);
    assert_eq!(config.session.tick_millis, 1000);

    let storage = build_storage(&config.storage).expect("storage builds");
    storage.save(&demo_workout());
    assert!(db_path.exists());
    assert_eq!(storage.load().map(|w| w.id), Some("demo-1".to_string()));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_json_config_with_memory_backend() {
    let json_content = r#"{
        "storage": { "backend": "memory", "path": "" },
        "session": { "rest_seconds": 120, "vibration_millis": 400 }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config loads");
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.session.rest_seconds, 120);
    assert_eq!(config.session.vibration_millis, 400);

    let storage = build_storage(&config.storage).expect("storage builds");
    assert!(storage.load().is_none());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unknown_backend_is_rejected() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file
        .write_all(br#"{ "storage": { "backend": "redis", "path": "x" } }"#)
        .expect("Failed to write to temp file");
    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    assert!(config::load_from_file(Some(path.clone())).is_err());

    std::fs::remove_file(path).ok();
}
