//! Configuration file loading for preference-kiosk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KIOSK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./kiosk.toml` or `./.kiosk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/preference-kiosk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileBedrockConfig, FileConfig, FileImageConfig, FileKioskConfig,
    FileLoggingConfig, FilePromptsConfig, FileResultsConfig, FileTextConfig, Severity,
};
pub use loader::ConfigLoader;
