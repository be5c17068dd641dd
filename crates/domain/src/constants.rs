//! Application constants
//!
//! Centralized location for domain-level constants used by the session
//! runtime and its adapters.

// Session timing
pub const DEFAULT_REST_SECONDS: u32 = 90;
pub const DEFAULT_TICK_MILLIS: u64 = 1000;
pub const DEFAULT_VIBRATION_MILLIS: u64 = 200;
pub const TIMER_JOIN_TIMEOUT_MS: u64 = 2000;

// Set log steppers
pub const WEIGHT_STEP: f64 = 2.5;
pub const REPS_STEP: i64 = 1;
/// Upper bound on set slots per exercise.
pub const MAX_SETS: u32 = 50;

// Presentation
pub const NEXT_PREVIEW_LEN: usize = 3;
pub const DEFAULT_WORKOUT_TITLE: &str = "Strength Training";
pub const DEFAULT_HERO_IMAGE: &str = "/images/workout-main.jpg";
pub const NEXT_EXERCISE_LABEL: &str = "Next exercise";
pub const FINISH_WORKOUT_LABEL: &str = "Finish workout";
pub const EMPTY_SESSION_MESSAGE: &str = "No exercise at this position.";

// Draft persistence
pub const DRAFT_STORAGE_KEY: &str = "sparta_current_workout";
pub const DEFAULT_POOL_SIZE: u32 = 2;
pub const DRAFT_FILE_NAME: &str = "sparta_current_workout.json";
