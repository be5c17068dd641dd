//! JSON file draft storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sparta_core::workout::storage::{decode_draft, encode_draft};
use sparta_core::WorkoutStorage;
use sparta_domain::constants::DRAFT_FILE_NAME;
use sparta_domain::Workout;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Keeps the draft as one JSON document inside a directory.
///
/// Writes land in a sibling temp file first and are renamed into place, so
/// a crash mid-write leaves the previous draft intact.
#[derive(Debug, Clone)]
pub struct FileWorkoutStorage {
    path: PathBuf,
}

impl FileWorkoutStorage {
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { path: dir.as_ref().join(DRAFT_FILE_NAME) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Option<String>, InfraError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn try_save(&self, workout: &Workout) -> Result<(), InfraError> {
        let raw = encode_draft(workout)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn try_clear(&self) -> Result<(), InfraError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl WorkoutStorage for FileWorkoutStorage {
    fn load(&self) -> Option<Workout> {
        match self.try_load() {
            Ok(Some(raw)) => decode_draft(&raw),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "Failed to read workout draft");
                None
            }
        }
    }

    fn save(&self, workout: &Workout) {
        match self.try_save(workout) {
            Ok(()) => debug!(workout_id = %workout.id, "Workout draft saved"),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "Failed to save workout draft");
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = self.try_clear() {
            warn!(error = %err, path = %self.path.display(), "Failed to clear workout draft");
        }
    }
}
