//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types.

mod generation;
mod kiosk;
mod providers;

pub use generation::{FileImageConfig, FileTextConfig};
pub use kiosk::{FileKioskConfig, FileLoggingConfig, FilePromptsConfig, FileResultsConfig};
pub use providers::FileBedrockConfig;

use kiosk_application::ControllerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field, e.g. `text.top_p`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Prompt list location
    pub prompts: FilePromptsConfig,
    /// Result record location
    pub results: FileResultsConfig,
    /// Text model settings
    pub text: FileTextConfig,
    /// Image model settings
    pub image: FileImageConfig,
    /// AWS Bedrock credentials and region
    pub bedrock: FileBedrockConfig,
    /// Session loop settings
    pub kiosk: FileKioskConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.text.model_id.trim().is_empty() {
            issues.push(ConfigIssue::error("text.model_id", "text model id is empty"));
        }
        if self.image.model_id.trim().is_empty() {
            issues.push(ConfigIssue::error("image.model_id", "image model id is empty"));
        }
        if self.text.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                "text.max_tokens",
                "text.max_tokens must be greater than 0",
            ));
        }
        if self.text.temperature < 0.0 {
            issues.push(ConfigIssue::error(
                "text.temperature",
                format!("text.temperature must not be negative (got {})", self.text.temperature),
            ));
        }
        if !(self.text.top_p > 0.0 && self.text.top_p <= 1.0) {
            issues.push(ConfigIssue::error(
                "text.top_p",
                format!("text.top_p must be in (0, 1] (got {})", self.text.top_p),
            ));
        }
        if self.image.steps == 0 {
            issues.push(ConfigIssue::error(
                "image.steps",
                "image.steps must be greater than 0",
            ));
        }
        if self.image.seed_max == 0 {
            issues.push(ConfigIssue::warning(
                "image.seed_max",
                "image.seed_max is 0: both candidates will share a seed and may be identical",
            ));
        }

        issues
    }

    /// Controller parameters derived from the `[image]` and `[kiosk]` sections
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig::default()
            .with_seed_max(self.image.seed_max)
            .with_error_cooldown(Duration::from_secs(self.kiosk.error_cooldown_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[prompts]
path = "/etc/kiosk/prompts.json"

[results]
dir = "/var/lib/kiosk/results"

[text]
max_tokens = 300
temperature = 0.7

[image]
steps = 30
seed_max = 4294967295

[bedrock]
region = "us-west-2"
profile = "kiosk"

[kiosk]
error_cooldown_secs = 10

[logging]
session_log = "/var/log/kiosk/sessions.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.prompts.path, PathBuf::from("/etc/kiosk/prompts.json"));
        assert_eq!(config.results.dir, PathBuf::from("/var/lib/kiosk/results"));
        assert_eq!(config.text.max_tokens, 300);
        assert_eq!(config.text.top_k, 250);
        assert_eq!(config.image.steps, 30);
        assert_eq!(config.image.seed_max, u32::MAX);
        assert_eq!(config.bedrock.region, "us-west-2");
        assert_eq!(config.bedrock.profile.as_deref(), Some("kiosk"));
        assert_eq!(
            config.logging.session_log,
            Some(PathBuf::from("/var/log/kiosk/sessions.jsonl"))
        );
        assert_eq!(
            config.controller_config().error_cooldown,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_default_config_matches_generation_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.prompts.path, PathBuf::from("prompts.json"));
        assert_eq!(config.results.dir, PathBuf::from("/results"));
        assert_eq!(config.text.to_params(), kiosk_domain::TextGenerationParams::default());
        assert_eq!(config.image.to_params(), kiosk_domain::ImageGenerationParams::default());
        assert_eq!(config.text.stop_sequences, vec!["\n\nHuman:".to_string()]);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.text.max_tokens = 0;
        config.text.top_p = 1.5;
        config.image.steps = 0;
        config.image.seed_max = 0;

        let issues = config.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["text.max_tokens", "text.top_p", "image.steps", "image.seed_max"]
        );
        assert_eq!(issues[3].severity, Severity::Warning);
        assert!(!issues[3].is_error());
        assert!(issues[..3].iter().all(ConfigIssue::is_error));
    }
}
