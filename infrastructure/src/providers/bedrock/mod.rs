//! AWS Bedrock inference provider
//!
//! Invokes the text (Claude completion) and image (Stable Diffusion XL)
//! models via AWS IAM authentication.

mod adapter;
mod types;

pub use adapter::BedrockInferenceBackend;
