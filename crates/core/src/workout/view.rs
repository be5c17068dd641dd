//! View models for the active workout screen.
//!
//! Plain data built from session state. Rendering is left to the shell.

use serde::Serialize;
use sparta_domain::constants::{
    DEFAULT_HERO_IMAGE, DEFAULT_WORKOUT_TITLE, EMPTY_SESSION_MESSAGE, FINISH_WORKOUT_LABEL,
    NEXT_EXERCISE_LABEL,
};
use sparta_domain::utils::format::{display_exercise_name, format_countdown, format_elapsed};
use sparta_domain::{Exercise, Route, SetField, SetLogEntry, Workout};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub title: String,
    /// `mm:ss`, present only while the elapsed clock runs
    pub elapsed: Option<String>,
    pub back: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub image: String,
    pub alt: String,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleView {
    pub reps: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRowView {
    pub index: usize,
    pub label: String,
    pub weight: String,
    pub reps: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextExerciseView {
    pub name: String,
    pub reps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestOverlayView {
    pub countdown: String,
    pub seconds_left: u32,
    pub dismissible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub label: &'static str,
    pub finishes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyView {
    pub message: &'static str,
    pub escape: Route,
}

/// Everything the active workout screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveWorkoutView {
    pub header: HeaderView,
    pub hero: HeroView,
    pub title: TitleView,
    pub sets: Vec<SetRowView>,
    pub next: Vec<NextExerciseView>,
    pub rest: Option<RestOverlayView>,
    pub cta: CtaView,
}

/// User actions emitted by the active workout screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    MarkSetDone(usize),
    UpdateField { index: usize, field: SetField, value: String },
    StepWeight { index: usize, delta: f64 },
    StepReps { index: usize, delta: i64 },
    SkipRest,
    HeroLoaded,
    Advance,
    Back,
}

/// Focal muscles, then the workout name, then a generic fallback.
#[must_use]
pub fn workout_title(workout: &Workout) -> String {
    [workout.focal_muscles.trim(), workout.name.trim()]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(DEFAULT_WORKOUT_TITLE)
        .to_string()
}

#[must_use]
pub fn header_view(workout: &Workout, elapsed_seconds: Option<u64>) -> HeaderView {
    HeaderView {
        title: workout_title(workout),
        elapsed: elapsed_seconds.map(format_elapsed),
        back: Route::Back,
    }
}

#[must_use]
pub fn hero_view(exercise: &Exercise, loaded: bool) -> HeroView {
    let image = exercise
        .image
        .as_deref()
        .filter(|image| !image.trim().is_empty())
        .unwrap_or(DEFAULT_HERO_IMAGE);

    HeroView { image: image.to_string(), alt: exercise.name.clone(), loading: !loaded }
}

#[must_use]
pub fn title_view(exercise: &Exercise) -> TitleView {
    TitleView { reps: exercise.reps.clone(), name: display_exercise_name(&exercise.name) }
}

#[must_use]
pub fn set_rows(entries: &[SetLogEntry], done: &[bool]) -> Vec<SetRowView> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| SetRowView {
            index,
            label: format!("#{}", index + 1),
            weight: entry.weight.clone(),
            reps: entry.reps.clone(),
            done: done.get(index).copied().unwrap_or(false),
        })
        .collect()
}

/// Up to `limit` exercises after `index`.
#[must_use]
pub fn next_exercises(workout: &Workout, index: usize, limit: usize) -> Vec<NextExerciseView> {
    workout
        .exercises
        .iter()
        .skip(index.saturating_add(1))
        .take(limit)
        .map(|exercise| NextExerciseView { name: exercise.name.clone(), reps: exercise.reps.clone() })
        .collect()
}

/// Present only while the countdown is above zero.
#[must_use]
pub fn rest_overlay(seconds_left: u32) -> Option<RestOverlayView> {
    (seconds_left > 0).then(|| RestOverlayView {
        countdown: format_countdown(seconds_left),
        seconds_left,
        dismissible: true,
    })
}

#[must_use]
pub fn cta_view(is_last: bool) -> CtaView {
    if is_last {
        CtaView { label: FINISH_WORKOUT_LABEL, finishes: true }
    } else {
        CtaView { label: NEXT_EXERCISE_LABEL, finishes: false }
    }
}

#[must_use]
pub fn empty_view() -> EmptyView {
    EmptyView { message: EMPTY_SESSION_MESSAGE, escape: Route::WorkoutOverview }
}
