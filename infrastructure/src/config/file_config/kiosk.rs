//! Kiosk runtime settings (`[prompts]`, `[results]`, `[kiosk]`, `[logging]`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[prompts]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// JSON prompt list (default: "prompts.json")
    pub path: PathBuf,
}

impl Default for FilePromptsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("prompts.json"),
        }
    }
}

/// `[results]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResultsConfig {
    /// Directory receiving one `<session_id>.json` per session (default: "/results")
    pub dir: PathBuf,
}

impl Default for FileResultsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/results"),
        }
    }
}

/// `[kiosk]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKioskConfig {
    /// Seconds to stay in ERROR after a backend failure before advancing
    pub error_cooldown_secs: u64,
}

impl Default for FileKioskConfig {
    fn default() -> Self {
        Self {
            error_cooldown_secs: 5,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving session lifecycle events
    pub session_log: Option<PathBuf>,
    /// Directory for daily-rotated diagnostic logs
    pub log_dir: Option<PathBuf>,
}
