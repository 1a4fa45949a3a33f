//! JSON prompt list file.
//!
//! The file holds an array of `{"prompt": "...", "model": "claude" | "sdxl"}`
//! objects. Unknown model tags fail the whole load.

use async_trait::async_trait;
use kiosk_application::ports::prompt_source::{PromptSource, PromptSourceError};
use kiosk_domain::PromptEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`PromptSource`] backed by a JSON file on disk
pub struct JsonPromptFile {
    path: PathBuf,
}

impl JsonPromptFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse a prompt list from JSON text.
    pub fn parse(json: &str) -> Result<Vec<PromptEntry>, PromptSourceError> {
        let entries: Vec<PromptEntry> =
            serde_json::from_str(json).map_err(|e| PromptSourceError::Parse(e.to_string()))?;
        for (index, entry) in entries.iter().enumerate() {
            entry
                .validate()
                .map_err(|e| PromptSourceError::Parse(format!("entry {}: {}", index, e)))?;
        }
        Ok(entries)
    }
}

#[async_trait]
impl PromptSource for JsonPromptFile {
    async fn load(&self) -> Result<Vec<PromptEntry>, PromptSourceError> {
        debug!(path = %self.path.display(), "Loading prompt list");
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => PromptSourceError::NotFound(self.path.display().to_string()),
                _ => PromptSourceError::Read(format!("{}: {}", self.path.display(), e)),
            })?;
        Self::parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_domain::ModelKind;

    #[tokio::test]
    async fn test_load_prompt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        std::fs::write(
            &path,
            r#"[{"prompt": "draw a cat", "model": "sdxl"}, {"prompt": "tell a joke", "model": "claude"}]"#,
        )
        .unwrap();

        let prompts = JsonPromptFile::new(&path).load().await.unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].model, ModelKind::Image);
        assert_eq!(prompts[1].prompt, "tell a joke");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonPromptFile::new(dir.path().join("absent.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, PromptSourceError::NotFound(_)));
    }

    #[test]
    fn test_unknown_model_tag_is_parse_error() {
        let err = JsonPromptFile::parse(r#"[{"prompt": "hi", "model": "llama"}]"#).unwrap_err();
        assert!(matches!(err, PromptSourceError::Parse(ref msg) if msg.contains("llama")));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(JsonPromptFile::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_blank_prompt() {
        let err = JsonPromptFile::parse(
            r#"[{"prompt": "draw a cat", "model": "sdxl"}, {"prompt": "", "model": "claude"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, PromptSourceError::Parse(_)));
        assert!(err.to_string().contains("entry 1"));
        assert!(err.to_string().contains("Invalid prompt entry"));
    }
}
