//! Recording mocks for the session ports.

use std::time::Duration;

use parking_lot::Mutex;
use sparta_core::{Haptics, IdentityProvider, Navigator, WorkoutStorage};
use sparta_domain::{CompletedWorkout, Route, Workout};

/// In-memory draft slot that counts saves and clears.
#[derive(Default)]
pub struct MockStorage {
    draft: Mutex<Option<Workout>>,
    saves: Mutex<usize>,
    clears: Mutex<usize>,
}

impl MockStorage {
    pub fn with_draft(workout: Workout) -> Self {
        Self { draft: Mutex::new(Some(workout)), ..Default::default() }
    }

    pub fn draft(&self) -> Option<Workout> {
        self.draft.lock().clone()
    }

    pub fn saves(&self) -> usize {
        *self.saves.lock()
    }

    pub fn clears(&self) -> usize {
        *self.clears.lock()
    }
}

impl WorkoutStorage for MockStorage {
    fn load(&self) -> Option<Workout> {
        self.draft.lock().clone()
    }

    fn save(&self, workout: &Workout) {
        *self.draft.lock() = Some(workout.clone());
        *self.saves.lock() += 1;
    }

    fn clear(&self) {
        *self.draft.lock() = None;
        *self.clears.lock() += 1;
    }
}

/// Identity provider with an optional current workout.
#[derive(Default)]
pub struct MockIdentity {
    current: Option<Workout>,
    completed: Mutex<Vec<CompletedWorkout>>,
}

impl MockIdentity {
    pub fn with_current(workout: Workout) -> Self {
        Self { current: Some(workout), ..Default::default() }
    }

    pub fn completed(&self) -> Vec<CompletedWorkout> {
        self.completed.lock().clone()
    }
}

impl IdentityProvider for MockIdentity {
    fn current_workout(&self) -> Option<Workout> {
        self.current.clone()
    }

    fn complete_workout(&self, summary: &CompletedWorkout) {
        self.completed.lock().push(summary.clone());
    }
}

#[derive(Default)]
pub struct MockNavigator {
    routes: Mutex<Vec<Route>>,
}

impl MockNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}

#[derive(Default)]
pub struct MockHaptics {
    calls: Mutex<Vec<Duration>>,
}

impl MockHaptics {
    pub fn calls(&self) -> Vec<Duration> {
        self.calls.lock().clone()
    }
}

impl Haptics for MockHaptics {
    fn vibrate(&self, duration: Duration) {
        self.calls.lock().push(duration);
    }
}
