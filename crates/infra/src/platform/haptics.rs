//! Haptics for hosts without a vibration motor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use sparta_core::Haptics;
use tracing::debug;

/// Logs vibration requests instead of driving hardware.
#[derive(Debug, Default)]
pub struct LogHaptics {
    pulses: AtomicUsize,
}

impl LogHaptics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vibration requests received.
    #[must_use]
    pub fn pulses(&self) -> usize {
        self.pulses.load(Ordering::Acquire)
    }
}

impl Haptics for LogHaptics {
    fn vibrate(&self, duration: Duration) {
        self.pulses.fetch_add(1, Ordering::AcqRel);
        debug!(duration_ms = duration.as_millis() as u64, "Vibrate");
    }
}
