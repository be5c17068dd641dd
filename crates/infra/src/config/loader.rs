//! Configuration loader
//!
//! Loads the runtime configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Environment variables, when the storage variables are present
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. JSON and TOML are both accepted, chosen by file extension
//!
//! ## Environment Variables
//! - `SPARTA_STORAGE_BACKEND`: `file`, `sqlite` or `memory` (required)
//! - `SPARTA_STORAGE_PATH`: draft directory or database file (required)
//! - `SPARTA_STORAGE_POOL_SIZE`: SQLite pool size
//! - `SPARTA_REST_SECONDS`: rest countdown length
//! - `SPARTA_TICK_MILLIS`: clock tick interval
//! - `SPARTA_VIBRATION_MILLIS`: vibration length when rest ends
//!
//! ## File Locations
//! `config.{json,toml}` and `sparta.{json,toml}`, searched in the working
//! directory, then up to two of its parents, then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sparta_domain::{Config, Result, SessionConfig, SpartaError, StorageBackend, StorageConfig};

const CONFIG_NAMES: [&str; 4] = ["config.json", "config.toml", "sparta.json", "sparta.toml"];
/// Parent directories of the working directory that are searched.
const PARENT_LEVELS: usize = 2;

/// Load configuration, environment first, then file.
///
/// # Errors
/// Returns `SpartaError::Config` when neither source yields a valid config.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `SPARTA_*` environment variables.
///
/// # Errors
/// Returns `SpartaError::Config` if a required variable is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let backend = env_var("SPARTA_STORAGE_BACKEND").and_then(|s| {
        StorageBackend::from_str(s.trim().to_ascii_lowercase().as_str())
            .map_err(|_| SpartaError::Config(format!("Invalid storage backend: {s}")))
    })?;
    let path = env_var("SPARTA_STORAGE_PATH")?;

    let storage_defaults = StorageConfig::default();
    let session_defaults = SessionConfig::default();

    Ok(Config {
        storage: StorageConfig {
            backend,
            path,
            pool_size: env_parse("SPARTA_STORAGE_POOL_SIZE", storage_defaults.pool_size)?,
        },
        session: SessionConfig {
            rest_seconds: env_parse("SPARTA_REST_SECONDS", session_defaults.rest_seconds)?,
            tick_millis: env_parse("SPARTA_TICK_MILLIS", session_defaults.tick_millis)?,
            vibration_millis: env_parse(
                "SPARTA_VIBRATION_MILLIS",
                session_defaults.vibration_millis,
            )?,
            next_preview_len: session_defaults.next_preview_len,
        },
    })
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `SpartaError::Config` if the file is missing, unreadable or
/// not valid JSON/TOML.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SpartaError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SpartaError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SpartaError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SpartaError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SpartaError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SpartaError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Candidate files in search order for a working directory and an optional
/// executable directory.
fn candidates(cwd: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    cwd.ancestors()
        .take(PARENT_LEVELS + 1)
        .chain(exe_dir)
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// Return the first existing config file among the standard locations.
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let exe_path = std::env::current_exe().ok();
    let exe_dir = exe_path.as_deref().and_then(Path::parent);

    candidates(&cwd, exe_dir).into_iter().find(|path| path.exists())
}

/// Get a required environment variable.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| SpartaError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional environment variable, `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| SpartaError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 6] = [
        "SPARTA_STORAGE_BACKEND",
        "SPARTA_STORAGE_PATH",
        "SPARTA_STORAGE_POOL_SIZE",
        "SPARTA_REST_SECONDS",
        "SPARTA_TICK_MILLIS",
        "SPARTA_VIBRATION_MILLIS",
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    fn temp_config(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SPARTA_STORAGE_BACKEND", "SQLite");
        std::env::set_var("SPARTA_STORAGE_PATH", "/tmp/sparta.db");
        std::env::set_var("SPARTA_STORAGE_POOL_SIZE", "4");
        std::env::set_var("SPARTA_REST_SECONDS", "60");
        std::env::set_var("SPARTA_TICK_MILLIS", "500");
        std::env::set_var("SPARTA_VIBRATION_MILLIS", "300");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.path, "/tmp/sparta.db");
        assert_eq!(config.storage.pool_size, 4);
        assert_eq!(config.session.rest_seconds, 60);
        assert_eq!(config.session.tick_millis, 500);
        assert_eq!(config.session.vibration_millis, 300);
        assert_eq!(config.session.next_preview_len, 3);
    }

    #[test]
    fn test_load_from_env_optional_vars_default() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SPARTA_STORAGE_BACKEND", "file");
        std::env::set_var("SPARTA_STORAGE_PATH", "drafts");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SPARTA_STORAGE_BACKEND", "memory");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(SpartaError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SPARTA_STORAGE_BACKEND", "postgres");
        std::env::set_var("SPARTA_STORAGE_PATH", "x");
        assert!(matches!(load_from_env(), Err(SpartaError::Config(_))));

        std::env::set_var("SPARTA_STORAGE_BACKEND", "file");
        std::env::set_var("SPARTA_REST_SECONDS", "ninety");
        let result = load_from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("SPARTA_REST_SECONDS"));
    }

    #[test]
    fn test_candidates_search_cwd_then_parents_then_exe_dir() {
        let found = candidates(Path::new("/a/b/c"), Some(Path::new("/opt/bin")));
        assert_eq!(found.len(), CONFIG_NAMES.len() * 4);
        assert_eq!(found[0], PathBuf::from("/a/b/c/config.json"));
        assert!(found.contains(&PathBuf::from("/a/b/sparta.toml")));
        assert!(found.contains(&PathBuf::from("/a/sparta.json")));
        assert!(!found.contains(&PathBuf::from("/config.json")));
        assert_eq!(found.last(), Some(&PathBuf::from("/opt/bin/sparta.toml")));
    }

    #[test]
    fn test_partial_storage_section_uses_defaults() {
        let path = temp_config(r#"{ "storage": { "path": "drafts" } }"#, "json");

        let config = load_from_file(Some(path.clone())).expect("partial config parses");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path, "drafts");
        assert_eq!(config.storage.pool_size, 2);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_json() {
        let path = temp_config(
            r#"{
                "storage": { "backend": "memory", "path": "unused" },
                "session": { "rest_seconds": 45 }
            }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).expect("config from JSON file");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.pool_size, 2);
        assert_eq!(config.session.rest_seconds, 45);
        assert_eq!(config.session.tick_millis, 1000);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = temp_config(
            r#"
[storage]
backend = "sqlite"
path = "sparta.db"
pool_size = 3

[session]
vibration_millis = 500
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).expect("config from TOML file");
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.pool_size, 3);
        assert_eq!(config.session.vibration_millis, 500);
        assert_eq!(config.session.rest_seconds, 90);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = parse_config("{}", Path::new("empty.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(SpartaError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let path = temp_config(r#"{ "storage": "#, "json");
        assert!(load_from_file(Some(path.clone())).is_err(), "Should fail with invalid JSON");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("backend: file", Path::new("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_candidates_cover_both_formats() {
        let names: Vec<PathBuf> = candidates_in(Path::new("/srv")).collect();
        assert_eq!(names.first(), Some(&PathBuf::from("/srv/config.json")));
        assert!(names.contains(&PathBuf::from("/srv/sparta.toml")));
        assert!(names.contains(&PathBuf::from("/srv/../../config.toml")));
    }
}
