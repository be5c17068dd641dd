//! Session clocks
//!
//! Two independent tickers back the active workout screen:
//!
//! - [`ElapsedClock`] counts up once per tick for the whole session.
//! - [`RestClock`] counts a fixed rest period down after a set is marked
//!   done and vibrates the device when it reaches zero.
//!
//! Each clock owns a spawned tokio task, a [`CancellationToken`] and the
//! task's [`JoinHandle`]. Values live in `tokio::sync::watch` senders; the
//! rest countdown can be subscribed to instead of polled. Dropping a clock
//! cancels its task.

use std::sync::Arc;
use std::time::Duration;

use sparta_domain::constants::TIMER_JOIN_TIMEOUT_MS;
use sparta_domain::SessionConfig;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::ports::Haptics;

/// Errors raised while joining clock tasks.
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("Timer task did not stop within {0:?}")]
    JoinTimeout(Duration),

    #[error("Timer task failed: {0}")]
    TaskFailed(String),
}

/// Clock settings derived from [`SessionConfig`].
#[derive(Debug, Clone)]
pub struct TimerConfig {
    /// Interval between ticks for both clocks
    pub tick: Duration,
    /// Ticks in a fresh rest countdown
    pub rest_seconds: u32,
    /// Vibration length when the countdown reaches zero
    pub vibration: Duration,
    /// Join timeout for `shutdown`
    pub join_timeout: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for TimerConfig {
    fn from(config: &SessionConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.tick_millis.max(1)),
            rest_seconds: config.rest_seconds,
            vibration: Duration::from_millis(config.vibration_millis),
            join_timeout: Duration::from_millis(TIMER_JOIN_TIMEOUT_MS),
        }
    }
}

async fn join_with_timeout(handle: JoinHandle<()>, timeout: Duration) -> Result<(), TimerError> {
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            warn!("Timer task panicked: {}", e);
            Err(TimerError::TaskFailed(e.to_string()))
        }
        Err(_) => {
            warn!("Timer task did not complete within timeout");
            Err(TimerError::JoinTimeout(timeout))
        }
    }
}

/// Count-up session clock.
pub struct ElapsedClock {
    seconds: Arc<watch::Sender<u64>>,
    tick: Duration,
    join_timeout: Duration,
    cancellation: CancellationToken,
    task_handle: Option<JoinHandle<()>>,
}

impl ElapsedClock {
    #[must_use]
    pub fn new(config: &TimerConfig) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            seconds: Arc::new(tx),
            tick: config.tick,
            join_timeout: config.join_timeout,
            cancellation: CancellationToken::new(),
            task_handle: None,
        }
    }

    /// Spawn the ticker. Must be called inside a tokio runtime. Starting a
    /// running clock does nothing; a stopped clock resumes from its value.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        self.cancellation = CancellationToken::new();
        let cancel = self.cancellation.clone();
        let seconds = Arc::clone(&self.seconds);
        let tick = self.tick;

        self.task_handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + tick, tick);
            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        debug!("Elapsed clock cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        seconds.send_modify(|s| *s += 1);
                    }
                }
            }
        }));
        debug!("Elapsed clock started");
    }

    /// Cancel the ticker without waiting for it. The value is kept.
    pub fn stop(&mut self) {
        self.cancellation.cancel();
        self.task_handle = None;
    }

    /// Cancel the ticker and wait for it to exit.
    pub async fn shutdown(&mut self) -> Result<(), TimerError> {
        self.cancellation.cancel();
        match self.task_handle.take() {
            Some(handle) => join_with_timeout(handle, self.join_timeout).await,
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        *self.seconds.borrow()
    }
}

impl Drop for ElapsedClock {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}

/// Published state of the rest countdown.
///
/// `generation` increases on every restart or dismissal; a ticker only
/// decrements the countdown it was spawned for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestCountdown {
    pub generation: u64,
    pub seconds_left: u32,
}

impl RestCountdown {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.seconds_left > 0
    }

    /// Whether this value is the natural end of the countdown `previous`
    /// was part of. Dismissals and restarts bump the generation and do not count.
    #[must_use]
    pub fn finished_after(&self, previous: &Self) -> bool {
        self.generation == previous.generation && previous.is_active() && !self.is_active()
    }
}

/// Fixed-length rest countdown. At most one countdown is live at a time.
pub struct RestClock {
    state: Arc<watch::Sender<RestCountdown>>,
    haptics: Arc<dyn Haptics>,
    config: TimerConfig,
    cancellation: CancellationToken,
    task_handle: Option<JoinHandle<()>>,
}

impl RestClock {
    #[must_use]
    pub fn new(config: &TimerConfig, haptics: Arc<dyn Haptics>) -> Self {
        let (tx, _rx) = watch::channel(RestCountdown::default());
        Self {
            state: Arc::new(tx),
            haptics,
            config: config.clone(),
            cancellation: CancellationToken::new(),
            task_handle: None,
        }
    }

    /// Replace any running countdown with a fresh full-length one. Must be
    /// called inside a tokio runtime.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.cancel_task();

        let seconds = self.config.rest_seconds;
        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            state.seconds_left = seconds;
            generation = state.generation;
        });

        if seconds == 0 {
            return;
        }

        self.cancellation = CancellationToken::new();
        let cancel = self.cancellation.clone();
        let state = Arc::clone(&self.state);
        let haptics = Arc::clone(&self.haptics);
        let tick = self.config.tick;
        let vibration = self.config.vibration;

        self.task_handle = Some(tokio::spawn(async move {
            Self::countdown(state, haptics, generation, tick, vibration, cancel).await;
        }));
        debug!(generation, seconds, "Rest countdown started");
    }

    async fn countdown(
        state: Arc<watch::Sender<RestCountdown>>,
        haptics: Arc<dyn Haptics>,
        generation: u64,
        tick: Duration,
        vibration: Duration,
        cancel: CancellationToken,
    ) {
        let mut interval = interval_at(Instant::now() + tick, tick);
        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = interval.tick() => {
                    let mut reached_zero = false;
                    let current = state.send_if_modified(|s| {
                        if s.generation != generation || s.seconds_left == 0 {
                            return false;
                        }
                        s.seconds_left -= 1;
                        reached_zero = s.seconds_left == 0;
                        true
                    });

                    if !current {
                        break;
                    }
                    if reached_zero {
                        debug!(generation, "Rest countdown finished");
                        haptics.vibrate(vibration);
                        break;
                    }
                }
            }
        }
    }

    /// Force the countdown to zero without vibrating.
    pub fn dismiss(&mut self) {
        self.cancel_task();
        self.state.send_modify(|state| {
            state.generation += 1;
            state.seconds_left = 0;
        });
    }

    /// Cancel the ticker without touching the published value.
    pub fn stop(&mut self) {
        self.cancel_task();
    }

    /// Cancel the ticker and wait for it to exit.
    pub async fn shutdown(&mut self) -> Result<(), TimerError> {
        self.cancellation.cancel();
        match self.task_handle.take() {
            Some(handle) => join_with_timeout(handle, self.config.join_timeout).await,
            None => Ok(()),
        }
    }

    fn cancel_task(&mut self) {
        self.cancellation.cancel();
        self.task_handle = None;
    }

    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.state.borrow().seconds_left
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    #[must_use]
    pub fn snapshot(&self) -> RestCountdown {
        *self.state.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RestCountdown> {
        self.state.subscribe()
    }
}

impl Drop for RestClock {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}

/// Both clocks of one session screen.
pub struct SessionTimers {
    pub elapsed: ElapsedClock,
    pub rest: RestClock,
}

impl SessionTimers {
    #[must_use]
    pub fn new(config: &TimerConfig, haptics: Arc<dyn Haptics>) -> Self {
        Self { elapsed: ElapsedClock::new(config), rest: RestClock::new(config, haptics) }
    }

    /// Cancel both tickers.
    pub fn stop(&mut self) {
        self.elapsed.stop();
        self.rest.stop();
    }

    /// Cancel both tickers and join them.
    pub async fn shutdown(&mut self) -> Result<(), TimerError> {
        let elapsed = self.elapsed.shutdown().await;
        let rest = self.rest.shutdown().await;
        elapsed.and(rest)
    }
}
