//! In-process draft storage.

use parking_lot::Mutex;
use sparta_core::workout::storage::{decode_draft, encode_draft};
use sparta_core::WorkoutStorage;
use sparta_domain::Workout;
use tracing::warn;

/// Holds the serialized draft in memory. Going through the same encoding as
/// the durable adapters keeps load semantics identical.
#[derive(Debug, Default)]
pub struct InMemoryWorkoutStorage {
    slot: Mutex<Option<String>>,
}

impl InMemoryWorkoutStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a raw document.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(raw.into())) }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl WorkoutStorage for InMemoryWorkoutStorage {
    fn load(&self) -> Option<Workout> {
        self.slot.lock().as_deref().and_then(decode_draft)
    }

    fn save(&self, workout: &Workout) {
        match encode_draft(workout) {
            Ok(raw) => *self.slot.lock() = Some(raw),
            Err(err) => warn!(error = %err, "Failed to encode workout draft"),
        }
    }

    fn clear(&self) {
        *self.slot.lock() = None;
    }
}
