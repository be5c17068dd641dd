//! In-process identity provider.

use parking_lot::{Mutex, RwLock};
use sparta_core::IdentityProvider;
use sparta_domain::{CompletedWorkout, Workout};
use tracing::info;

/// Holds the signed-in user's current workout and the summaries of the
/// workouts they completed during this process.
#[derive(Debug, Default)]
pub struct LocalIdentityProvider {
    current: RwLock<Option<Workout>>,
    history: Mutex<Vec<CompletedWorkout>>,
}

impl LocalIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_current(workout: Workout) -> Self {
        Self { current: RwLock::new(Some(workout)), ..Self::default() }
    }

    pub fn set_current(&self, workout: Option<Workout>) {
        *self.current.write() = workout;
    }

    #[must_use]
    pub fn history(&self) -> Vec<CompletedWorkout> {
        self.history.lock().clone()
    }
}

impl IdentityProvider for LocalIdentityProvider {
    fn current_workout(&self) -> Option<Workout> {
        self.current.read().clone()
    }

    fn complete_workout(&self, summary: &CompletedWorkout) {
        info!(
            workout_id = %summary.workout_id,
            elapsed_seconds = summary.elapsed_seconds,
            sets_done = summary.sets_done(),
            volume = summary.total_volume(),
            "Recorded completed workout"
        );

        let mut current = self.current.write();
        if current.as_ref().is_some_and(|w| w.id == summary.workout_id) {
            *current = None;
        }
        drop(current);

        self.history.lock().push(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use sparta_domain::demo_workout;

    use super::*;

    fn summary(workout_id: &str) -> CompletedWorkout {
        CompletedWorkout {
            workout_id: workout_id.into(),
            workout_name: "Treino".into(),
            elapsed_seconds: 1200,
            completed_at: 0,
            exercises: Vec::new(),
        }
    }

    #[test]
    fn completing_current_workout_clears_it() {
        let identity = LocalIdentityProvider::with_current(demo_workout());
        assert!(identity.current_workout().is_some());

        identity.complete_workout(&summary("demo-1"));
        assert!(identity.current_workout().is_none());
        assert_eq!(identity.history().len(), 1);
    }

    #[test]
    fn completing_other_workout_keeps_current() {
        let identity = LocalIdentityProvider::new();
        identity.set_current(Some(demo_workout()));

        identity.complete_workout(&summary("other"));
        assert!(identity.current_workout().is_some());
        assert_eq!(identity.history()[0].workout_id, "other");
    }
}
