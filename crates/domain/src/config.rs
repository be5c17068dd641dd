//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_POOL_SIZE, DEFAULT_REST_SECONDS, DEFAULT_TICK_MILLIS, DEFAULT_VIBRATION_MILLIS,
    NEXT_PREVIEW_LEN,
};
use crate::impl_domain_status_conversions;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Which adapter backs the workout draft slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Sqlite,
    Memory,
}

impl_domain_status_conversions!(StorageBackend {
    File => "file",
    Sqlite => "sqlite",
    Memory => "memory",
});

/// Draft storage configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend, database file for the sqlite backend.
    pub path: String,
    pub pool_size: u32,
}

/// Workout session timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    #[serde(default = "default_vibration_millis")]
    pub vibration_millis: u64,
    #[serde(default = "default_next_preview_len")]
    pub next_preview_len: usize,
}

fn default_rest_seconds() -> u32 {
    DEFAULT_REST_SECONDS
}

fn default_tick_millis() -> u64 {
    DEFAULT_TICK_MILLIS
}

fn default_vibration_millis() -> u64 {
    DEFAULT_VIBRATION_MILLIS
}

fn default_next_preview_len() -> usize {
    NEXT_PREVIEW_LEN
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::File, path: ".sparta".to_string(), pool_size: DEFAULT_POOL_SIZE }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rest_seconds: DEFAULT_REST_SECONDS,
            tick_millis: DEFAULT_TICK_MILLIS,
            vibration_millis: DEFAULT_VIBRATION_MILLIS,
            next_preview_len: NEXT_PREVIEW_LEN,
        }
    }
}
