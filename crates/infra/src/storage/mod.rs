//! Workout draft storage adapters

pub mod file;
pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use sparta_core::WorkoutStorage;
use sparta_domain::{Result, StorageBackend, StorageConfig};
use tracing::info;

pub use file::FileWorkoutStorage;
pub use memory::InMemoryWorkoutStorage;
pub use sqlite::SqliteWorkoutStorage;

/// Build the adapter selected by configuration.
pub fn build_storage(config: &StorageConfig) -> Result<Arc<dyn WorkoutStorage>> {
    info!(backend = %config.backend, path = %config.path, "Initialising workout storage");

    let storage: Arc<dyn WorkoutStorage> = match config.backend {
        StorageBackend::File => Arc::new(FileWorkoutStorage::new(&config.path)),
        StorageBackend::Sqlite => {
            Arc::new(SqliteWorkoutStorage::open(&config.path, config.pool_size)?)
        }
        StorageBackend::Memory => Arc::new(InMemoryWorkoutStorage::new()),
    };
    Ok(storage)
}
