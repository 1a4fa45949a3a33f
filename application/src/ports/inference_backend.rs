//! Inference backend port
//!
//! Defines the interface for calling the managed text and image models.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while invoking a model
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Backend producing candidate outputs
///
/// Calls are expected to be stochastic: two calls with the same input
/// should diverge, which is what the human compares.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Produce one bounded completion for `prompt`
    async fn generate_text(&self, prompt: &str) -> Result<String, InferenceError>;

    /// Produce one image for `prompt` rendered with `seed`
    async fn generate_image(&self, prompt: &str, seed: u32) -> Result<Vec<u8>, InferenceError>;
}
