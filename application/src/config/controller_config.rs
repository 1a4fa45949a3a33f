//! Controller parameters — session loop control.
//!
//! [`ControllerConfig`] groups the static parameters the
//! [`SessionController`](crate::use_cases::session_controller::SessionController)
//! needs beyond its ports.

use kiosk_domain::ImageGenerationParams;
use std::time::Duration;

/// Session loop control parameters.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Image seeds are drawn uniformly from `0..=seed_max`.
    pub seed_max: u32,
    /// How long the driver waits in `ERROR` before moving to the next prompt.
    pub error_cooldown: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            seed_max: ImageGenerationParams::default().seed_max,
            error_cooldown: Duration::from_secs(5),
        }
    }
}

impl ControllerConfig {
    pub fn with_seed_max(mut self, seed_max: u32) -> Self {
        self.seed_max = seed_max;
        self
    }

    pub fn with_error_cooldown(mut self, cooldown: Duration) -> Self {
        self.error_cooldown = cooldown;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_range_matches_image_params() {
        assert_eq!(ControllerConfig::default().seed_max, 1000);
    }

    #[test]
    fn test_builders() {
        let config = ControllerConfig::default()
            .with_seed_max(7)
            .with_error_cooldown(Duration::from_millis(10));
        assert_eq!(config.seed_max, 7);
        assert_eq!(config.error_cooldown, Duration::from_millis(10));
    }
}
