//! Active workout session runtime

pub mod overview;
pub mod ports;
pub mod session;
pub mod set_log;
pub mod storage;
pub mod timers;
pub mod view;

pub use overview::WorkoutOverview;
pub use ports::{Haptics, IdentityProvider, Navigator, SessionDeps, WorkoutStorage};
pub use session::{Advance, EmptySession, SessionScreen, SessionState, WorkoutSession, WorkoutSource};
pub use set_log::SetLog;
pub use timers::{ElapsedClock, RestClock, RestCountdown, SessionTimers, TimerConfig, TimerError};
pub use view::{ActiveWorkoutView, SessionIntent};
