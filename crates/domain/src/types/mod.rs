//! Domain types and models

pub mod session;
pub mod workout;

pub use session::{
    CompletedWorkout, ExerciseLog, LoggedSet, Route, SessionLaunch, SetField, SetLogEntry,
};
pub use workout::{Exercise, MuscleGroup, Progress, Workout, WorkoutStatus};
