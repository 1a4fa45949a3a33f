//! Generation and provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of backend settings without depending
//! on any serialization format (TOML, JSON, etc.).

/// Sampling parameters for the text model.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationParams {
    /// Provider model id (default: "anthropic.claude-v2").
    pub model_id: String,
    /// Completion token budget (default: 150).
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    /// Generation stops at any of these markers.
    pub stop_sequences: Vec<String>,
    /// Anthropic API version sent in the request body.
    pub anthropic_version: String,
}

impl Default for TextGenerationParams {
    fn default() -> Self {
        Self {
            model_id: "anthropic.claude-v2".to_string(),
            max_tokens: 150,
            temperature: 1.0,
            top_k: 250,
            top_p: 0.999,
            stop_sequences: vec!["\n\nHuman:".to_string()],
            anthropic_version: "bedrock-2023-05-31".to_string(),
        }
    }
}

/// Diffusion parameters for the image model.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGenerationParams {
    /// Provider model id (default: "stability.stable-diffusion-xl-v0").
    pub model_id: String,
    /// Classifier-free guidance scale (default: 10).
    pub cfg_scale: f32,
    /// Diffusion steps (default: 50).
    pub steps: u32,
    /// Seeds are drawn uniformly from `0..=seed_max` per call (default: 1000).
    pub seed_max: u32,
}

impl Default for ImageGenerationParams {
    fn default() -> Self {
        Self {
            model_id: "stability.stable-diffusion-xl-v0".to_string(),
            cfg_scale: 10.0,
            steps: 50,
            seed_max: 1000,
        }
    }
}

/// AWS Bedrock provider configuration.
#[derive(Debug, Clone)]
pub struct BedrockProviderConfig {
    /// AWS region (default: `AWS_DEFAULT_REGION`, else "us-east-1").
    pub region: String,
    /// AWS profile name for credentials.
    pub profile: Option<String>,
}

impl Default for BedrockProviderConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
        }
    }
}
