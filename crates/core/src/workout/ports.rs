//! Port interfaces for the workout session runtime
//!
//! These traits define the boundaries between the session controller and
//! the outside world: durable draft storage, the signed-in user, navigation
//! and the device's vibration motor. None of them return errors; adapters
//! degrade to a safe default and log instead.

use std::sync::Arc;
use std::time::Duration;

use sparta_domain::{CompletedWorkout, Route, Workout};

/// Best-effort persistence for the single in-progress workout draft.
pub trait WorkoutStorage: Send + Sync {
    /// Read the draft. Missing, unparsable or malformed documents are absent.
    fn load(&self) -> Option<Workout>;

    /// Overwrite the draft. Failures are swallowed.
    fn save(&self, workout: &Workout);

    /// Remove the draft. Failures are swallowed.
    fn clear(&self);
}

/// Session/identity collaborator.
pub trait IdentityProvider: Send + Sync {
    /// The authenticated user's current workout, if any.
    fn current_workout(&self) -> Option<Workout>;

    /// Called exactly once when a session reaches natural completion.
    fn complete_workout(&self, summary: &CompletedWorkout);
}

/// Receives route transitions out of (or back from) the session screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Optional haptic feedback. Devices without a vibration motor ignore it.
pub trait Haptics: Send + Sync {
    fn vibrate(&self, duration: Duration);
}

/// Collaborators injected into a session.
#[derive(Clone)]
pub struct SessionDeps {
    pub storage: Arc<dyn WorkoutStorage>,
    pub identity: Arc<dyn IdentityProvider>,
    pub navigator: Arc<dyn Navigator>,
    pub haptics: Arc<dyn Haptics>,
}

impl SessionDeps {
    pub fn new(
        storage: Arc<dyn WorkoutStorage>,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        haptics: Arc<dyn Haptics>,
    ) -> Self {
        Self { storage, identity, navigator, haptics }
    }
}
