//! SQLite key-value draft storage.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use sparta_core::workout::storage::{decode_draft, encode_draft};
use sparta_core::WorkoutStorage;
use sparta_domain::constants::DRAFT_STORAGE_KEY;
use sparta_domain::{Result, Workout};
use tracing::{debug, warn};

use crate::database::manager::map_sql_error;
use crate::database::DbManager;
use crate::errors::InfraError;

/// Stores the draft as one row of the `kv_store` table.
pub struct SqliteWorkoutStorage {
    db: DbManager,
    key: String,
}

impl SqliteWorkoutStorage {
    /// Open the database, run migrations and check it answers queries.
    pub fn open<P: AsRef<Path>>(path: P, pool_size: u32) -> Result<Self> {
        let db = DbManager::new(path, pool_size)?;
        db.run_migrations()?;
        db.health_check()?;
        Ok(Self::with_manager(db))
    }

    #[must_use]
    pub fn with_manager(db: DbManager) -> Self {
        Self { db, key: DRAFT_STORAGE_KEY.to_string() }
    }

    #[must_use]
    pub fn manager(&self) -> &DbManager {
        &self.db
    }

    fn try_load(&self) -> Result<Option<String>> {
        let conn = self.db.get_connection()?;
        conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![self.key], |row| {
            row.get::<_, String>(0)
        })
        .optional()
        .map_err(map_sql_error)
    }

    fn try_save(&self, workout: &Workout) -> Result<()> {
        let raw = encode_draft(workout).map_err(InfraError::from)?;
        let conn = self.db.get_connection()?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.key, raw, Utc::now().timestamp()],
        )
        .map_err(map_sql_error)?;
        Ok(())
    }

    fn try_clear(&self) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![self.key])
            .map_err(map_sql_error)?;
        Ok(())
    }
}

impl WorkoutStorage for SqliteWorkoutStorage {
    fn load(&self) -> Option<Workout> {
        match self.try_load() {
            Ok(raw) => raw.as_deref().and_then(decode_draft),
            Err(err) => {
                warn!(error = %err, error_type = err.label(), "Failed to read workout draft");
                None
            }
        }
    }

    fn save(&self, workout: &Workout) {
        match self.try_save(workout) {
            Ok(()) => debug!(workout_id = %workout.id, "Workout draft saved"),
            Err(err) => {
                warn!(error = %err, error_type = err.label(), "Failed to save workout draft");
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = self.try_clear() {
            warn!(error = %err, error_type = err.label(), "Failed to clear workout draft");
        }
    }
}

#[cfg(test)]
mod tests {
    use sparta_domain::demo_workout;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn save_overwrites_single_row() {
        let dir = TempDir::new().unwrap();
        let storage = SqliteWorkoutStorage::open(dir.path().join("sparta.db"), 2).unwrap();
        assert!(storage.load().is_none());

        let mut workout = demo_workout();
        storage.save(&workout);
        workout.exercises[0].done = Some(true);
        storage.save(&workout);

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.exercises[0].done, Some(true));

        let conn = storage.manager().get_connection().unwrap();
        let rows: i64 = conn.query_row("SELECT COUNT(*) FROM kv_store", [], |r| r.get(0)).unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn open_rejects_a_file_that_is_not_a_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sparta.db");
        std::fs::write(&path, vec![0x5a; 4096]).unwrap();

        assert!(SqliteWorkoutStorage::open(&path, 1).is_err());
    }

    #[test]
    fn clear_removes_row() {
        let dir = TempDir::new().unwrap();
        let storage = SqliteWorkoutStorage::open(dir.path().join("sparta.db"), 1).unwrap();
        storage.save(&demo_workout());
        storage.clear();
        assert!(storage.load().is_none());
        storage.clear();
    }

    #[test]
    fn malformed_row_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let storage = SqliteWorkoutStorage::open(dir.path().join("sparta.db"), 1).unwrap();
        let conn = storage.manager().get_connection().unwrap();
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, 'garbage', 0)",
            params![DRAFT_STORAGE_KEY],
        )
        .unwrap();
        drop(conn);

        assert!(storage.load().is_none());
    }
}
