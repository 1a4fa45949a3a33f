//! Request and response bodies for the Bedrock `InvokeModel` APIs
//!
//! The text model speaks the legacy Claude completion format (streamed
//! `completion` chunks); the image model speaks the Stability SDXL format
//! (base64 artifacts).

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use kiosk_application::ports::inference_backend::InferenceError;
use kiosk_domain::{ImageGenerationParams, TextGenerationParams};
use serde::{Deserialize, Serialize};
use tracing::warn;

const HUMAN_TURN: &str = "\n\nHuman:";
const ASSISTANT_TURN: &str = "\n\nAssistant:";

// ─── Claude (text) ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ClaudeCompletionRequest<'a> {
    pub prompt: String,
    pub max_tokens_to_sample: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub stop_sequences: &'a [String],
    pub anthropic_version: &'a str,
}

impl<'a> ClaudeCompletionRequest<'a> {
    pub fn new(prompt: &str, params: &'a TextGenerationParams) -> Self {
        Self {
            prompt: format_claude_prompt(prompt),
            max_tokens_to_sample: params.max_tokens,
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            stop_sequences: &params.stop_sequences,
            anthropic_version: &params.anthropic_version,
        }
    }

    pub fn to_body(&self) -> Result<Vec<u8>, InferenceError> {
        serde_json::to_vec(self)
            .map_err(|e| InferenceError::Other(format!("Failed to encode request: {}", e)))
    }
}

/// Wrap a bare instruction in the Human/Assistant turns the completion
/// API requires. Prompts that already open with a Human turn pass through.
pub fn format_claude_prompt(prompt: &str) -> String {
    if prompt.starts_with(HUMAN_TURN) {
        return prompt.to_string();
    }
    format!("{HUMAN_TURN} {prompt}{ASSISTANT_TURN}")
}

#[derive(Debug, Deserialize)]
struct ClaudeCompletionChunk {
    #[serde(default)]
    completion: String,
}

/// Extract the `completion` text from one streamed chunk.
pub fn parse_completion_chunk(bytes: &[u8]) -> Result<String, InferenceError> {
    serde_json::from_slice::<ClaudeCompletionChunk>(bytes)
        .map(|chunk| chunk.completion)
        .map_err(|e| InferenceError::InvalidResponse(format!("Bad completion chunk: {}", e)))
}

// ─── SDXL (image) ────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SdxlTextPrompt<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SdxlRequest<'a> {
    pub text_prompts: Vec<SdxlTextPrompt<'a>>,
    pub cfg_scale: f32,
    pub seed: u32,
    pub steps: u32,
}

impl<'a> SdxlRequest<'a> {
    pub fn new(prompt: &'a str, seed: u32, params: &ImageGenerationParams) -> Self {
        Self {
            text_prompts: vec![SdxlTextPrompt { text: prompt }],
            cfg_scale: params.cfg_scale,
            seed,
            steps: params.steps,
        }
    }

    pub fn to_body(&self) -> Result<Vec<u8>, InferenceError> {
        serde_json::to_vec(self)
            .map_err(|e| InferenceError::Other(format!("Failed to encode request: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct SdxlResponse {
    #[serde(default)]
    artifacts: Vec<SdxlArtifact>,
}

#[derive(Debug, Deserialize)]
struct SdxlArtifact {
    base64: String,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Decode the first artifact of an SDXL response into image bytes.
pub fn decode_sdxl_response(bytes: &[u8]) -> Result<Vec<u8>, InferenceError> {
    let response: SdxlResponse = serde_json::from_slice(bytes)
        .map_err(|e| InferenceError::InvalidResponse(format!("Bad SDXL response: {}", e)))?;

    let artifact = response
        .artifacts
        .into_iter()
        .next()
        .ok_or_else(|| InferenceError::InvalidResponse("SDXL returned no artifacts".to_string()))?;

    if let Some(reason) = artifact.finish_reason.as_deref()
        && reason != "SUCCESS"
    {
        warn!(finish_reason = reason, "SDXL artifact did not finish cleanly");
    }

    BASE64
        .decode(artifact.base64.as_bytes())
        .map_err(|e| InferenceError::InvalidResponse(format!("Bad artifact encoding: {}", e)))
}

// ─── SDK errors ──────────────────────────────────────────────────

/// Convert an `InvokeModel` SDK error to an InferenceError.
pub fn convert_invoke_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<
        aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError,
    >,
) -> InferenceError {
    use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;

    match err {
        aws_sdk_bedrockruntime::error::SdkError::ServiceError(service_err) => {
            match service_err.err() {
                InvokeModelError::ThrottlingException(e) => {
                    InferenceError::RequestFailed(format!("Bedrock throttled: {}", e))
                }
                InvokeModelError::ModelNotReadyException(e) => {
                    InferenceError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
                }
                InvokeModelError::ValidationException(e) => {
                    InferenceError::RequestFailed(format!("Bedrock validation error: {}", e))
                }
                InvokeModelError::ModelTimeoutException(_) => InferenceError::Timeout,
                other => InferenceError::RequestFailed(format!("Bedrock error: {:?}", other)),
            }
        }
        aws_sdk_bedrockruntime::error::SdkError::TimeoutError(_) => InferenceError::Timeout,
        other => InferenceError::ConnectionError(format!("Bedrock SDK error: {}", other)),
    }
}

/// Convert an `InvokeModelWithResponseStream` SDK error to an InferenceError.
pub fn convert_stream_invoke_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<
        aws_sdk_bedrockruntime::operation::invoke_model_with_response_stream::InvokeModelWithResponseStreamError,
    >,
) -> InferenceError {
    use aws_sdk_bedrockruntime::operation::invoke_model_with_response_stream::InvokeModelWithResponseStreamError as StreamError;

    match err {
        aws_sdk_bedrockruntime::error::SdkError::ServiceError(service_err) => {
            match service_err.err() {
                StreamError::ThrottlingException(e) => {
                    InferenceError::RequestFailed(format!("Bedrock throttled: {}", e))
                }
                StreamError::ModelNotReadyException(e) => {
                    InferenceError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
                }
                StreamError::ValidationException(e) => {
                    InferenceError::RequestFailed(format!("Bedrock validation error: {}", e))
                }
                StreamError::ModelTimeoutException(_) => InferenceError::Timeout,
                other => InferenceError::RequestFailed(format!("Bedrock error: {:?}", other)),
            }
        }
        aws_sdk_bedrockruntime::error::SdkError::TimeoutError(_) => InferenceError::Timeout,
        other => InferenceError::ConnectionError(format!("Bedrock SDK error: {}", other)),
    }
}
