//! Application-level configuration.
//!
//! - [`ControllerConfig`] — seed range and error cooldown for the session loop

pub mod controller_config;

pub use controller_config::ControllerConfig;
