//! Workout session types
//!
//! Transient state exchanged between the session controller, its
//! collaborators and the presentation layer.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::workout::Workout;
use crate::impl_domain_status_conversions;

/// One set slot of the active exercise, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SetLogEntry {
    pub weight: String,
    pub reps: String,
}

impl SetLogEntry {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.weight.is_empty() && self.reps.is_empty()
    }
}

/// Editable cell of a set row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetField {
    Weight,
    Reps,
}

impl_domain_status_conversions!(SetField {
    Weight => "weight",
    Reps => "reps",
});

/// Navigation payload used to enter the active workout screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLaunch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Workout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<i64>,
    #[serde(default)]
    pub start_timer: bool,
}

impl SessionLaunch {
    #[must_use]
    pub fn new(workout: Workout) -> Self {
        Self { workout: Some(workout), start_at: None, start_timer: true }
    }

    #[must_use]
    pub fn starting_at(mut self, index: i64) -> Self {
        self.start_at = Some(index);
        self
    }

    #[must_use]
    pub fn with_timer(mut self, start_timer: bool) -> Self {
        self.start_timer = start_timer;
        self
    }
}

/// Screens the session runtime can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    StudentDashboard,
    WorkoutOverview,
    ActiveWorkout,
    /// Generic history back navigation.
    Back,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "/dashboard/student",
            Self::WorkoutOverview => "/student/workout",
            Self::ActiveWorkout => "/active-workout",
            Self::Back => "..",
        }
    }
}

/// A set as recorded at the end of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub done: bool,
}

/// Everything logged for one exercise during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise_id: String,
    pub name: String,
    pub sets: Vec<LoggedSet>,
}

impl ExerciseLog {
    /// Sum of weight x reps over sets that were marked done.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets
            .iter()
            .filter(|s| s.done)
            .map(|s| s.weight.unwrap_or(0.0) * f64::from(s.reps.unwrap_or(0)))
            .sum()
    }
}

/// Summary handed to the identity collaborator when a session completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub workout_id: String,
    pub workout_name: String,
    pub elapsed_seconds: u64,
    /// Unix timestamp (seconds).
    pub completed_at: i64,
    pub exercises: Vec<ExerciseLog>,
}

impl CompletedWorkout {
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseLog::volume).sum()
    }

    #[must_use]
    pub fn sets_done(&self) -> usize {
        self.exercises.iter().flat_map(|e| &e.sets).filter(|s| s.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_payload_uses_camel_case() {
        let launch: SessionLaunch =
            serde_json::from_str(r#"{"startAt": 2, "startTimer": true}"#).unwrap();
        assert_eq!(launch.start_at, Some(2));
        assert!(launch.start_timer);
        assert!(launch.workout.is_none());
    }

    #[test]
    fn launch_defaults_to_no_timer() {
        let launch: SessionLaunch = serde_json::from_str("{}").unwrap();
        assert!(!launch.start_timer);
    }

    #[test]
    fn volume_ignores_sets_not_done() {
        let log = ExerciseLog {
            exercise_id: "ex-1".into(),
            name: "Squat".into(),
            sets: vec![
                LoggedSet { weight: Some(100.0), reps: Some(5), done: true },
                LoggedSet { weight: Some(100.0), reps: Some(5), done: false },
                LoggedSet { weight: None, reps: Some(10), done: true },
            ],
        };
        assert!((log.volume() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::StudentDashboard.path(), "/dashboard/student");
        assert_eq!(Route::WorkoutOverview.path(), "/student/workout");
    }
}
