//! Prompt source port

use async_trait::async_trait;
use kiosk_domain::PromptEntry;
use thiserror::Error;

/// Errors that can occur while loading the prompt list
#[derive(Error, Debug)]
pub enum PromptSourceError {
    #[error("Prompt list not found: {0}")]
    NotFound(String),

    #[error("Could not read prompt list: {0}")]
    Read(String),

    #[error("Invalid prompt list: {0}")]
    Parse(String),
}

/// Supplies the list of prompts the kiosk cycles through.
///
/// Loaded once at initialization; an unknown model tag must be reported as
/// [`PromptSourceError::Parse`] so it never reaches a live session.
#[async_trait]
pub trait PromptSource: Send + Sync {
    async fn load(&self) -> Result<Vec<PromptEntry>, PromptSourceError>;
}
