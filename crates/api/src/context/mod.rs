//! Application context - dependency injection container

use std::sync::Arc;

use sparta_core::workout::session::SessionScreen;
use sparta_core::{SessionDeps, WorkoutOverview, WorkoutStorage};
use sparta_domain::{Config, Result, SessionLaunch};
use sparta_infra::{build_storage, LocalIdentityProvider, LogHaptics, LoggingNavigator};
use tracing::{info, warn};

/// Application context - holds configuration and the session collaborators
pub struct AppContext {
    pub config: Config,
    pub storage: Arc<dyn WorkoutStorage>,
    pub identity: Arc<LocalIdentityProvider>,
    pub navigator: Arc<LoggingNavigator>,
    pub haptics: Arc<LogHaptics>,
}

impl AppContext {
    /// Build the context for an explicit configuration.
    pub fn new(config: Config) -> Result<Self> {
        let storage = build_storage(&config.storage)?;

        info!(
            backend = %config.storage.backend,
            rest_seconds = config.session.rest_seconds,
            "Application context initialised"
        );

        Ok(Self {
            config,
            storage,
            identity: Arc::new(LocalIdentityProvider::new()),
            navigator: Arc::new(LoggingNavigator::new()),
            haptics: Arc::new(LogHaptics::new()),
        })
    }

    /// Load configuration from the environment or a config file, falling back
    /// to defaults when neither is available.
    pub fn from_env() -> Result<Self> {
        let config = sparta_infra::config::load().unwrap_or_else(|err| {
            warn!(error = %err, "No usable configuration found, using defaults");
            Config::default()
        });
        Self::new(config)
    }

    #[must_use]
    pub fn session_deps(&self) -> SessionDeps {
        SessionDeps::new(
            self.storage.clone(),
            self.identity.clone(),
            self.navigator.clone(),
            self.haptics.clone(),
        )
    }

    #[must_use]
    pub fn overview(&self) -> WorkoutOverview {
        WorkoutOverview::load(self.identity.as_ref(), self.storage.clone())
    }

    /// Open the session screen. Must be called inside a tokio runtime.
    #[must_use]
    pub fn open_session(&self, launch: SessionLaunch) -> SessionScreen {
        SessionScreen::open(launch, self.session_deps(), &self.config.session)
    }
}
