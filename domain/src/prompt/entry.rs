//! Prompt list entries

use crate::core::error::DomainError;
use crate::core::model::ModelKind;
use serde::{Deserialize, Serialize};

/// One line of the kiosk's prompt list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEntry {
    pub prompt: String,
    pub model: ModelKind,
}

impl PromptEntry {
    pub fn new(prompt: impl Into<String>, model: ModelKind) -> Self {
        Self {
            prompt: prompt.into(),
            model,
        }
    }

    /// Reject entries that would stage an empty prompt.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.trim().is_empty() {
            return Err(DomainError::InvalidPrompt(format!(
                "empty prompt for model {}",
                self.model
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompt_list() {
        let json = r#"[
            {"prompt": "draw a cat", "model": "sdxl"},
            {"prompt": "write a limerick", "model": "claude"}
        ]"#;
        let entries: Vec<PromptEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0], PromptEntry::new("draw a cat", ModelKind::Image));
        assert_eq!(entries[1].model, ModelKind::Text);
    }

    #[test]
    fn test_blank_prompt_is_invalid() {
        let err = PromptEntry::new("  ", ModelKind::Text).validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPrompt("empty prompt for model claude".to_string())
        );
        assert!(PromptEntry::new("draw a cat", ModelKind::Image).validate().is_ok());
    }

    #[test]
    fn test_unknown_model_tag_fails_whole_list() {
        let json = r#"[{"prompt": "hello", "model": "gpt"}]"#;
        let err = serde_json::from_str::<Vec<PromptEntry>>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown model specified: gpt"));
    }
}
