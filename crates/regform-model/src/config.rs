//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoint serving the remote country list.
pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";

/// Configuration for the form engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// URL of the remote country listing.
    pub countries_url: String,

    /// Abort deadline for the country fetch, in milliseconds.
    pub timeout_ms: u64,

    /// Input coalescing delay, in milliseconds.
    ///
    /// After an input event, the engine waits this long before validating.
    /// Additional input events reset the timer.
    pub debounce_ms: u64,

    /// Duration of the simulated submission work, in milliseconds.
    pub submit_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            countries_url: COUNTRIES_URL.to_string(),
            timeout_ms: 4500,
            debounce_ms: 250,
            submit_delay_ms: 1000,
        }
    }
}

impl FormConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
