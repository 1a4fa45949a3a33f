//! Model generation settings from TOML (`[text]` and `[image]` sections)

use kiosk_domain::{ImageGenerationParams, TextGenerationParams};
use serde::{Deserialize, Serialize};

/// `[text]` section: sampling parameters for the text model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTextConfig {
    /// Bedrock model id (default: "anthropic.claude-v2")
    pub model_id: String,
    /// Completion token budget (default: 150)
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub stop_sequences: Vec<String>,
    pub anthropic_version: String,
}

impl Default for FileTextConfig {
    fn default() -> Self {
        let params = TextGenerationParams::default();
        Self {
            model_id: params.model_id,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            stop_sequences: params.stop_sequences,
            anthropic_version: params.anthropic_version,
        }
    }
}

impl FileTextConfig {
    pub fn to_params(&self) -> TextGenerationParams {
        TextGenerationParams {
            model_id: self.model_id.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            stop_sequences: self.stop_sequences.clone(),
            anthropic_version: self.anthropic_version.clone(),
        }
    }
}

/// `[image]` section: diffusion parameters for the image model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Bedrock model id (default: "stability.stable-diffusion-xl-v0")
    pub model_id: String,
    pub cfg_scale: f32,
    pub steps: u32,
    /// Seeds are drawn from `0..=seed_max` (default: 1000)
    pub seed_max: u32,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        let params = ImageGenerationParams::default();
        Self {
            model_id: params.model_id,
            cfg_scale: params.cfg_scale,
            steps: params.steps,
            seed_max: params.seed_max,
        }
    }
}

impl FileImageConfig {
    pub fn to_params(&self) -> ImageGenerationParams {
        ImageGenerationParams {
            model_id: self.model_id.clone(),
            cfg_scale: self.cfg_scale,
            steps: self.steps,
            seed_max: self.seed_max,
        }
    }
}
