//! Application settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::poll::DEFAULT_POLL_INTERVAL;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Sampling interval in ms
    pub poll_interval_ms: u32,
    /// List default profiles alongside custom ones in the edit table
    pub show_default_profiles: bool,
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u32,
            show_default_profiles: false,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms as u64)
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        self.poll_interval_ms = self.poll_interval_ms.max(100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_clamps_the_poll_interval() {
        let mut settings = Settings {
            poll_interval_ms: 0,
            ..Default::default()
        };
        settings.validate();
        assert_eq!(settings.poll_interval_ms, 100);
        assert_eq!(settings.poll_interval(), Duration::from_millis(100));
    }
}
