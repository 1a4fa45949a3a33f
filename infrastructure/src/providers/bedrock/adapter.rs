//! Bedrock inference backend
//!
//! Implements `InferenceBackend` on the Bedrock `InvokeModel` APIs.
//! Handles AWS credential initialization and request encoding.

use super::types;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::types::ResponseStream;
use kiosk_application::ports::inference_backend::{InferenceBackend, InferenceError};
use kiosk_domain::{BedrockProviderConfig, ImageGenerationParams, TextGenerationParams};
use std::sync::Arc;
use tracing::{debug, info};

pub struct BedrockInferenceBackend {
    client: Arc<BedrockClient>,
    region: String,
    text: TextGenerationParams,
    image: ImageGenerationParams,
}

impl BedrockInferenceBackend {
    /// Create a new Bedrock backend.
    ///
    /// Initializes AWS credentials and creates a Bedrock Runtime client.
    pub async fn new(
        config: &BedrockProviderConfig,
        text: TextGenerationParams,
        image: ImageGenerationParams,
    ) -> Self {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        let client = BedrockClient::new(&aws_config);

        info!(
            region = %config.region,
            text_model = %text.model_id,
            image_model = %image.model_id,
            "Bedrock backend initialized"
        );

        Self {
            client: Arc::new(client),
            region: config.region.clone(),
            text,
            image,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl InferenceBackend for BedrockInferenceBackend {
    async fn generate_text(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = types::ClaudeCompletionRequest::new(prompt, &self.text).to_body()?;

        debug!(model = %self.text.model_id, "Calling Bedrock InvokeModelWithResponseStream");

        let output = self
            .client
            .invoke_model_with_response_stream()
            .model_id(&self.text.model_id)
            .content_type("application/json")
            .accept("*/*")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| types::convert_stream_invoke_error(&e))?;

        let mut stream = output.body;
        let mut completion = String::new();
        while let Some(event) = stream
            .recv()
            .await
            .map_err(|e| InferenceError::RequestFailed(format!("Bedrock stream error: {}", e)))?
        {
            if let ResponseStream::Chunk(part) = event
                && let Some(bytes) = part.bytes()
            {
                completion.push_str(&types::parse_completion_chunk(bytes.as_ref())?);
            }
        }

        debug!(chars = completion.len(), "Completion received");
        Ok(completion)
    }

    async fn generate_image(&self, prompt: &str, seed: u32) -> Result<Vec<u8>, InferenceError> {
        let body = types::SdxlRequest::new(prompt, seed, &self.image).to_body()?;

        debug!(model = %self.image.model_id, seed, "Calling Bedrock InvokeModel");

        let output = self
            .client
            .invoke_model()
            .model_id(&self.image.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| types::convert_invoke_error(&e))?;

        let image = types::decode_sdxl_response(output.body().as_ref())?;
        debug!(bytes = image.len(), "Image received");
        Ok(image)
    }
}
