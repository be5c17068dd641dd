//! Active workout session controller
//!
//! A session walks a workout forward one exercise at a time:
//!
//! ```text
//! AtExercise(start) --advance--> AtExercise(i + 1) ... AtExercise(N - 1) --advance--> Completed
//! ```
//!
//! There is no backward step. Completion hands a [`CompletedWorkout`] to the
//! identity provider, clears the stored draft and navigates to the student
//! dashboard, each exactly once. Every other change writes the workout back
//! to storage so an interrupted session can resume.

use chrono::Utc;
use sparta_domain::constants::NEXT_PREVIEW_LEN;
use sparta_domain::{
    demo_workout, CompletedWorkout, Exercise, ExerciseLog, Progress, Route, SessionConfig,
    SessionLaunch, SetField, SpartaError, Workout,
};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use super::ports::SessionDeps;
use super::set_log::SetLog;
use super::timers::{RestCountdown, SessionTimers, TimerConfig, TimerError};
use super::view::{
    cta_view, empty_view, header_view, hero_view, next_exercises, rest_overlay, set_rows,
    title_view, ActiveWorkoutView, EmptyView, NextExerciseView, SessionIntent,
};

/// Where the session's workout came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutSource {
    Launch,
    Identity,
    Draft,
    Demo,
}

impl WorkoutSource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Identity => "identity",
            Self::Draft => "draft",
            Self::Demo => "demo",
        }
    }
}

/// Pick the workout for a new session: launch payload, then the user's
/// current workout, then the stored draft, then the demo workout.
#[must_use]
pub fn resolve_workout(launch: Option<Workout>, deps: &SessionDeps) -> (Workout, WorkoutSource) {
    if let Some(workout) = launch {
        return (workout, WorkoutSource::Launch);
    }
    if let Some(workout) = deps.identity.current_workout() {
        return (workout, WorkoutSource::Identity);
    }
    if let Some(workout) = deps.storage.load() {
        return (workout, WorkoutSource::Draft);
    }
    (demo_workout(), WorkoutSource::Demo)
}

/// Clamp a requested start position into `[0, len - 1]`. Empty workouts start at 0.
#[must_use]
pub fn clamp_start(start_at: Option<i64>, len: usize) -> usize {
    let last = len.saturating_sub(1);
    match start_at {
        Some(index) if index > 0 => usize::try_from(index).map_or(last, |i| i.min(last)),
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AtExercise(usize),
    Completed,
}

/// Outcome of [`WorkoutSession::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Next { index: usize },
    Completed(CompletedWorkout),
}

/// The screen opened for a launch: a running session, or the empty state
/// when the workout has no exercises.
pub enum SessionScreen {
    Active(WorkoutSession),
    Empty(EmptySession),
}

impl SessionScreen {
    /// Resolve the workout and open the screen. Must be called inside a
    /// tokio runtime when the workout has exercises.
    #[instrument(skip_all)]
    #[must_use]
    pub fn open(launch: SessionLaunch, deps: SessionDeps, config: &SessionConfig) -> Self {
        let SessionLaunch { workout, start_at, start_timer } = launch;
        let (workout, source) = resolve_workout(workout, &deps);

        if workout.is_empty() {
            info!(workout_id = %workout.id, source = source.as_str(), "Workout has no exercises");
            return Self::Empty(EmptySession { workout, deps });
        }

        let index = clamp_start(start_at, workout.exercises.len());
        if start_at.is_some_and(|requested| i64::try_from(index).ok() != Some(requested)) {
            debug!(requested = ?start_at, index, "Clamped start position");
        }

        Self::Active(WorkoutSession::start(workout, source, index, start_timer, deps, config))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

/// Empty-state screen. Offers a single escape back to the overview.
pub struct EmptySession {
    workout: Workout,
    deps: SessionDeps,
}

impl EmptySession {
    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    #[must_use]
    pub fn view(&self) -> EmptyView {
        empty_view()
    }

    pub fn leave(self) {
        self.deps.navigator.navigate(empty_view().escape);
    }
}

pub struct WorkoutSession {
    workout: Workout,
    source: WorkoutSource,
    state: SessionState,
    set_log: SetLog,
    hero_loaded: bool,
    exercise_logs: Vec<ExerciseLog>,
    timers: SessionTimers,
    deps: SessionDeps,
    next_preview_len: usize,
}

impl WorkoutSession {
    fn start(
        workout: Workout,
        source: WorkoutSource,
        index: usize,
        start_timer: bool,
        deps: SessionDeps,
        config: &SessionConfig,
    ) -> Self {
        let mut timers = SessionTimers::new(&TimerConfig::from(config), deps.haptics.clone());
        if start_timer {
            timers.elapsed.start();
        }

        let set_log = workout.exercises.get(index).map(SetLog::for_exercise).unwrap_or_default();
        let next_preview_len =
            if config.next_preview_len == 0 { NEXT_PREVIEW_LEN } else { config.next_preview_len };

        let session = Self {
            workout,
            source,
            state: SessionState::AtExercise(index),
            set_log,
            hero_loaded: false,
            exercise_logs: Vec::new(),
            timers,
            deps,
            next_preview_len,
        };

        info!(
            workout_id = %session.workout.id,
            source = source.as_str(),
            index,
            exercises = session.workout.exercises.len(),
            timer = start_timer,
            "Workout session opened"
        );
        session.persist();
        session
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
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::AtExercise(index) => Some(index),
            SessionState::Completed => None,
        }
    }

    #[must_use]
    pub fn active_exercise(&self) -> Option<&Exercise> {
        self.current_index().and_then(|index| self.workout.exercises.get(index))
    }

    #[must_use]
    pub fn set_log(&self) -> &SetLog {
        &self.set_log
    }

    #[must_use]
    pub fn hero_loaded(&self) -> bool {
        self.hero_loaded
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.timers.elapsed.seconds()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timers.elapsed.is_running()
    }

    #[must_use]
    pub fn rest_seconds_left(&self) -> u32 {
        self.timers.rest.seconds_left()
    }

    /// Live rest countdown values for front ends that redraw on change.
    #[must_use]
    pub fn subscribe_rest(&self) -> watch::Receiver<RestCountdown> {
        self.timers.rest.subscribe()
    }

    pub fn update_field(&mut self, index: usize, field: SetField, value: &str) {
        if self.is_completed() {
            return;
        }
        if self.set_log.update_field(index, field, value) {
            self.persist();
        }
    }

    pub fn step_weight(&mut self, index: usize, delta: f64) {
        if self.is_completed() {
            return;
        }
        if self.set_log.step_weight(index, delta) {
            self.persist();
        }
    }

    pub fn step_reps(&mut self, index: usize, delta: i64) {
        if self.is_completed() {
            return;
        }
        if self.set_log.step_reps(index, delta) {
            self.persist();
        }
    }

    /// Mark a set done and start a fresh rest countdown.
    pub fn mark_set_done(&mut self, index: usize) {
        if self.is_completed() {
            return;
        }
        if self.set_log.mark_done(index) {
            debug!(index, "Set marked done");
            self.timers.rest.restart();
            self.persist();
        }
    }

    pub fn skip_rest(&mut self) {
        self.timers.rest.dismiss();
    }

    pub fn mark_hero_loaded(&mut self) {
        self.hero_loaded = true;
    }

    /// Move past the active exercise, completing the workout after the last one.
    #[instrument(skip(self), fields(workout_id = %self.workout.id))]
    pub fn advance(&mut self) -> Result<Advance, SpartaError> {
        let index = match self.state {
            SessionState::AtExercise(index) => index,
            SessionState::Completed => {
                warn!("Advance requested after completion");
                return Err(SpartaError::InvalidInput("workout session already completed".into()));
            }
        };

        self.record_exercise(index);

        let next = index + 1;
        if next < self.workout.exercises.len() {
            self.state = SessionState::AtExercise(next);
            self.set_log.reset(&self.workout.exercises[next]);
            self.hero_loaded = false;
            self.persist();
            debug!(index = next, "Advanced to next exercise");
            return Ok(Advance::Next { index: next });
        }

        Ok(Advance::Completed(self.complete()))
    }

    /// Back navigation. Stops the clocks and keeps the draft.
    #[instrument(skip_all)]
    pub fn leave(mut self) {
        self.timers.stop();
        self.deps.navigator.navigate(Route::Back);
        debug!(workout_id = %self.workout.id, "Left workout session");
    }

    /// Stop the clocks and wait for their tasks to exit.
    pub async fn shutdown(&mut self) -> Result<(), TimerError> {
        self.timers.shutdown().await
    }

    /// Dispatch a view intent. `Back` is rejected here; use [`Self::leave`].
    pub fn apply(&mut self, intent: SessionIntent) -> Result<Option<Advance>, SpartaError> {
        match intent {
            SessionIntent::MarkSetDone(index) => self.mark_set_done(index),
            SessionIntent::UpdateField { index, field, value } => {
                self.update_field(index, field, &value);
            }
            SessionIntent::StepWeight { index, delta } => self.step_weight(index, delta),
            SessionIntent::StepReps { index, delta } => self.step_reps(index, delta),
            SessionIntent::SkipRest => self.skip_rest(),
            SessionIntent::HeroLoaded => self.mark_hero_loaded(),
            SessionIntent::Advance => return self.advance().map(Some),
            SessionIntent::Back => {
                return Err(SpartaError::InvalidInput(
                    "back navigation consumes the session".into(),
                ));
            }
        }
        Ok(None)
    }

    #[must_use]
    pub fn next_exercises(&self) -> Vec<NextExerciseView> {
        match self.current_index() {
            Some(index) => next_exercises(&self.workout, index, self.next_preview_len),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_last_exercise(&self) -> bool {
        self.current_index().is_some_and(|index| index + 1 == self.workout.exercises.len())
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.workout.progress()
    }

    /// Screen model for the active exercise. `None` once completed.
    #[must_use]
    pub fn view(&self) -> Option<ActiveWorkoutView> {
        let exercise = self.active_exercise()?;
        let elapsed = self.is_timer_running().then(|| self.elapsed_seconds());

        Some(ActiveWorkoutView {
            header: header_view(&self.workout, elapsed),
            hero: hero_view(exercise, self.hero_loaded),
            title: title_view(exercise),
            sets: set_rows(self.set_log.entries(), self.set_log.done_flags()),
            next: self.next_exercises(),
            rest: rest_overlay(self.rest_seconds_left()),
            cta: cta_view(self.is_last_exercise()),
        })
    }

    fn record_exercise(&mut self, index: usize) {
        let Some(exercise) = self.workout.exercises.get_mut(index) else {
            return;
        };
        exercise.done = Some(true);
        self.exercise_logs.push(ExerciseLog {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            sets: self.set_log.to_logged_sets(),
        });
    }

    fn complete(&mut self) -> CompletedWorkout {
        self.timers.stop();
        self.state = SessionState::Completed;

        let summary = CompletedWorkout {
            workout_id: self.workout.id.clone(),
            workout_name: self.workout.name.clone(),
            elapsed_seconds: self.timers.elapsed.seconds(),
            completed_at: Utc::now().timestamp(),
            exercises: std::mem::take(&mut self.exercise_logs),
        };

        self.deps.identity.complete_workout(&summary);
        self.deps.storage.clear();
        self.deps.navigator.navigate(Route::StudentDashboard);

        info!(
            workout_id = %summary.workout_id,
            elapsed_seconds = summary.elapsed_seconds,
            sets_done = summary.sets_done(),
            "Workout completed"
        );
        summary
    }

    fn persist(&self) {
        if self.is_completed() {
            return;
        }
        self.deps.storage.save(&self.workout);
    }
}
