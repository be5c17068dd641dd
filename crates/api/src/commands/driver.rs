//! Screen state machine behind the `sparta` binary.
//!
//! The driver starts on the workout overview. `start` opens the active
//! session, `back` or completion returns to a freshly loaded overview.

use std::time::Instant;

use sparta_core::workout::session::{Advance, EmptySession, SessionScreen, WorkoutSession};
use sparta_core::workout::timers::RestCountdown;
use sparta_core::workout::view::ActiveWorkoutView;
use sparta_core::WorkoutOverview;
use sparta_domain::utils::format::format_elapsed;
use sparta_domain::{CompletedWorkout, SpartaError};
use tokio::sync::watch;
use tracing::warn;

use super::parse::{parse, Command, HELP};
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

enum Screen {
    Overview(WorkoutOverview),
    Session(WorkoutSession),
    Empty(EmptySession),
}

/// Output of one handled line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

pub struct Driver {
    ctx: AppContext,
    screen: Option<Screen>,
}

impl Driver {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let overview = ctx.overview();
        Self { ctx, screen: Some(Screen::Overview(overview)) }
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    #[must_use]
    pub fn screen_name(&self) -> &'static str {
        match self.screen {
            Some(Screen::Overview(_)) | None => "overview",
            Some(Screen::Session(_)) => "session",
            Some(Screen::Empty(_)) => "empty",
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&WorkoutSession> {
        match &self.screen {
            Some(Screen::Session(session)) => Some(session),
            _ => None,
        }
    }

    /// Rest countdown of the open session, if any.
    #[must_use]
    pub fn rest_updates(&self) -> Option<watch::Receiver<RestCountdown>> {
        self.session().map(WorkoutSession::subscribe_rest)
    }

    /// Render the current screen.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.screen.as_ref().map(render_screen).unwrap_or_default()
    }

    /// The active screen as JSON, for front ends that draw it themselves.
    pub fn render_json(&self) -> Result<String, SpartaError> {
        let value = match &self.screen {
            Some(Screen::Overview(overview)) => serde_json::to_value(overview.workout()),
            Some(Screen::Session(session)) => serde_json::to_value(session.view()),
            Some(Screen::Empty(empty)) => serde_json::to_value(empty.view()),
            None => Ok(serde_json::Value::Null),
        };
        value
            .and_then(|value| serde_json::to_string_pretty(&value))
            .map_err(|err| SpartaError::Internal(format!("failed to encode screen: {err}")))
    }

    /// Handle one input line. Errors are reported in the reply.
    pub fn handle(&mut self, line: &str) -> Reply {
        let command = match parse(line) {
            Ok(command) => command,
            Err(err) => return Reply::line(format!("error: {err}")),
        };

        let started = Instant::now();
        let result = self.dispatch(command.clone());
        log_command_execution(command.name(), started.elapsed(), result.as_ref().map(|_| ()));

        match result {
            Ok(reply) => reply,
            Err(err) => Reply::line(format!("error: {err}")),
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Reply, SpartaError> {
        match command {
            Command::Help => return Ok(Reply::line(HELP)),
            Command::Show => return Ok(Reply::lines(self.render())),
            Command::Json => return self.render_json().map(Reply::line),
            Command::Quit => {
                self.close();
                return Ok(Reply { lines: Vec::new(), quit: true });
            }
            _ => {}
        }

        let screen = self
            .screen
            .take()
            .ok_or_else(|| SpartaError::Internal("driver has no active screen".into()))?;

        let (next, reply) = match screen {
            Screen::Overview(overview) => self.on_overview(overview, command),
            Screen::Session(session) => self.on_session(session, command),
            Screen::Empty(empty) => self.on_empty(empty, &command),
        };
        self.screen = Some(next);
        reply
    }

    fn on_overview(
        &self,
        mut overview: WorkoutOverview,
        command: Command,
    ) -> (Screen, Result<Reply, SpartaError>) {
        let reply = match command {
            Command::Toggle(id) => overview.toggle_done(&id).map(|done| {
                Reply::line(format!("{id}: {}", if done { "done" } else { "not done" }))
            }),
            Command::Swap { original, replacement } => overview
                .swap_exercise(&original, &replacement)
                .map(|()| Reply::lines(render_overview(&overview))),
            Command::Start(index) => {
                let launch = match index {
                    Some(index) => overview.launch_at(index),
                    None => overview.launch(),
                };
                let screen = match self.ctx.open_session(launch) {
                    SessionScreen::Active(session) => Screen::Session(session),
                    SessionScreen::Empty(empty) => Screen::Empty(empty),
                };
                let lines = render_screen(&screen);
                return (screen, Ok(Reply::lines(lines)));
            }
            other => Err(wrong_screen(&other, "overview")),
        };
        (Screen::Overview(overview), reply)
    }

    fn on_session(
        &self,
        mut session: WorkoutSession,
        command: Command,
    ) -> (Screen, Result<Reply, SpartaError>) {
        if command == Command::Back {
            session.leave();
            return self.back_to_overview("Left the workout. Progress kept.");
        }

        let Some(intent) = command.to_intent() else {
            return (Screen::Session(session), Err(wrong_screen(&command, "session")));
        };

        match session.apply(intent) {
            Ok(Some(Advance::Completed(summary))) => {
                self.back_to_overview(&render_summary(&summary))
            }
            Ok(_) => {
                let lines = session.view().map(|view| render_session(&view)).unwrap_or_default();
                (Screen::Session(session), Ok(Reply::lines(lines)))
            }
            Err(err) => (Screen::Session(session), Err(err)),
        }
    }

    fn on_empty(
        &self,
        empty: EmptySession,
        command: &Command,
    ) -> (Screen, Result<Reply, SpartaError>) {
        if *command == Command::Back {
            empty.leave();
            return self.back_to_overview("");
        }
        (Screen::Empty(empty), Err(wrong_screen(command, "empty")))
    }

    fn back_to_overview(&self, message: &str) -> (Screen, Result<Reply, SpartaError>) {
        let overview = self.ctx.overview();
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(message.to_string());
        }
        lines.extend(render_overview(&overview));
        (Screen::Overview(overview), Ok(Reply::lines(lines)))
    }

    /// Stop any running session timers and wait for their tasks.
    /// The draft stays in storage so the session can be resumed.
    pub async fn shutdown(&mut self) {
        if let Some(Screen::Session(session)) = self.screen.as_mut() {
            if let Err(err) = session.shutdown().await {
                warn!(error = %err, "Session timers did not stop cleanly");
            }
        }
    }

    fn close(&mut self) {
        match self.screen.take() {
            Some(Screen::Session(session)) => session.leave(),
            Some(other) => self.screen = Some(other),
            None => {}
        }
    }
}

fn wrong_screen(command: &Command, screen: &str) -> SpartaError {
    SpartaError::InvalidInput(format!("`{}` is not available on the {screen} screen", command.name()))
}

fn render_screen(screen: &Screen) -> Vec<String> {
    match screen {
        Screen::Overview(overview) => render_overview(overview),
        Screen::Session(session) => {
            session.view().map(|view| render_session(&view)).unwrap_or_default()
        }
        Screen::Empty(empty) => {
            let view = empty.view();
            vec![view.message.to_string(), format!("back -> {}", view.escape.path())]
        }
    }
}

fn render_overview(overview: &WorkoutOverview) -> Vec<String> {
    let workout = overview.workout();
    let progress = overview.progress();
    let mut lines = vec![format!(
        "{} ({}/{} done, {:.0}%)",
        workout.name,
        progress.done,
        progress.total,
        progress.percent()
    )];

    for (position, exercise) in workout.exercises.iter().enumerate() {
        let mark = if exercise.is_done() { "x" } else { " " };
        let mut line = format!(
            "[{mark}] {}. {} {} {}x{}",
            position + 1,
            exercise.id,
            exercise.name,
            exercise.sets,
            exercise.reps
        );
        if let Some(options) = exercise.replacement_options.as_ref().filter(|o| !o.is_empty()) {
            let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
            line.push_str(&format!(" (swap: {})", ids.join(", ")));
        }
        lines.push(line);
    }
    lines
}

fn render_session(view: &ActiveWorkoutView) -> Vec<String> {
    let mut lines = Vec::new();
    match &view.header.elapsed {
        Some(elapsed) => lines.push(format!("{}  {elapsed}", view.header.title)),
        None => lines.push(view.header.title.clone()),
    }
    lines.push(format!("{} | {} reps", view.title.name, view.title.reps));

    for row in &view.sets {
        let done = if row.done { "  done" } else { "" };
        lines.push(format!("{}  weight: {:<6} reps: {:<4}{done}", row.label, row.weight, row.reps));
    }

    if let Some(rest) = &view.rest {
        lines.push(format!("Rest {} (skip to dismiss)", rest.countdown));
    }

    if !view.next.is_empty() {
        let next: Vec<String> =
            view.next.iter().map(|n| format!("{} ({})", n.name, n.reps)).collect();
        lines.push(format!("Up next: {}", next.join(", ")));
    }

    lines.push(format!("[{}]", view.cta.label));
    lines
}

fn render_summary(summary: &CompletedWorkout) -> String {
    format!(
        "Workout complete: {} in {}, {} sets, {:.1} kg volume",
        summary.workout_name,
        format_elapsed(summary.elapsed_seconds),
        summary.sets_done(),
        summary.total_volume()
    )
}
