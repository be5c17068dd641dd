//! Shared test helpers for `sparta-core` integration tests.
//!
//! Lightweight mocks for every session port. Each mock records its calls so
//! tests can assert on exact side-effect counts.

#![allow(dead_code)]

pub mod ports;

use std::sync::Arc;

use sparta_core::SessionDeps;

pub use ports::{MockHaptics, MockIdentity, MockNavigator, MockStorage};

/// Mocks plus the `SessionDeps` bundle wired to them.
pub struct Harness {
    pub storage: Arc<MockStorage>,
    pub identity: Arc<MockIdentity>,
    pub navigator: Arc<MockNavigator>,
    pub haptics: Arc<MockHaptics>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(MockStorage::default()),
            identity: Arc::new(MockIdentity::default()),
            navigator: Arc::new(MockNavigator::default()),
            haptics: Arc::new(MockHaptics::default()),
        }
    }

    pub fn deps(&self) -> SessionDeps {
        SessionDeps::new(
            self.storage.clone(),
            self.identity.clone(),
            self.navigator.clone(),
            self.haptics.clone(),
        )
    }
}
