//! Workout overview: the list screen that feeds the active session.
//!
//! Tracks exercise-level done flags, swaps exercises for one of their
//! listed replacements and builds launch payloads. Every change is written
//! to draft storage.

use std::sync::Arc;

use sparta_domain::{demo_workout, Progress, SessionLaunch, SpartaError, Workout};
use tracing::{debug, info};

use super::ports::{IdentityProvider, WorkoutStorage};
use super::session::WorkoutSource;

pub struct WorkoutOverview {
    workout: Workout,
    source: WorkoutSource,
    storage: Arc<dyn WorkoutStorage>,
}

impl WorkoutOverview {
    /// The user's current workout, then the stored draft, then the demo workout.
    /// The loaded workout is written back as the draft.
    #[must_use]
    pub fn load(identity: &dyn IdentityProvider, storage: Arc<dyn WorkoutStorage>) -> Self {
        let (workout, source) = if let Some(workout) = identity.current_workout() {
            (workout, WorkoutSource::Identity)
        } else if let Some(workout) = storage.load() {
            (workout, WorkoutSource::Draft)
        } else {
            (demo_workout(), WorkoutSource::Demo)
        };

        info!(workout_id = %workout.id, source = source.as_str(), "Workout overview loaded");
        let overview = Self { workout, source, storage };
        overview.persist();
        overview
    }

    #[must_use]
    pub fn from_workout(workout: Workout, storage: Arc<dyn WorkoutStorage>) -> Self {
        Self { workout, source: WorkoutSource::Launch, storage }
    }

    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    #[must_use]
    pub fn source(&self) -> WorkoutSource {
        self.source
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.workout.progress()
    }

    /// Flip an exercise's done flag. Returns the new value.
    pub fn toggle_done(&mut self, exercise_id: &str) -> Result<bool, SpartaError> {
        let exercise = self
            .workout
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| SpartaError::NotFound(format!("exercise {exercise_id}")))?;

        let done = !exercise.is_done();
        exercise.done = Some(done);
        debug!(exercise_id, done, "Toggled exercise");

        self.persist();
        Ok(done)
    }

    /// Replace an exercise with one of its replacement options. The replaced
    /// exercise becomes an option of its substitute so the swap can be undone.
    pub fn swap_exercise(
        &mut self,
        original_id: &str,
        replacement_id: &str,
    ) -> Result<(), SpartaError> {
        let position = self
            .workout
            .exercise_position(original_id)
            .ok_or_else(|| SpartaError::NotFound(format!("exercise {original_id}")))?;

        let original = &mut self.workout.exercises[position];
        let option_index = original
            .replacement_options
            .as_ref()
            .and_then(|options| options.iter().position(|option| option.id == replacement_id))
            .ok_or_else(|| {
                SpartaError::NotFound(format!(
                    "replacement {replacement_id} for exercise {original_id}"
                ))
            })?;

        let mut options = original.replacement_options.take().unwrap_or_default();
        let mut replacement = options.remove(option_index);
        let mut carried = replacement.replacement_options.take().unwrap_or_default();
        let mut previous = std::mem::replace(original, replacement);
        previous.replacement_options = None;
        previous.done = None;

        carried.push(previous);
        carried.extend(options);
        original.replacement_options = Some(carried);

        info!(original_id, replacement_id, "Swapped exercise");
        self.persist();
        Ok(())
    }

    /// Launch payload starting at the first exercise with the clock running.
    #[must_use]
    pub fn launch(&self) -> SessionLaunch {
        SessionLaunch::new(self.workout.clone())
    }

    /// Launch payload starting at `index`.
    #[must_use]
    pub fn launch_at(&self, index: usize) -> SessionLaunch {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        SessionLaunch::new(self.workout.clone()).starting_at(index)
    }

    fn persist(&self) {
        self.storage.save(&self.workout);
    }
}
