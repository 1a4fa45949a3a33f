//! Provider configuration from TOML (`[bedrock]` section)

use kiosk_domain::BedrockProviderConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region (default: `$AWS_DEFAULT_REGION`, else "us-east-1")
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: std::env::var("AWS_DEFAULT_REGION")
                .ok()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| BedrockProviderConfig::default().region),
            profile: None,
        }
    }
}

impl FileBedrockConfig {
    pub fn to_provider_config(&self) -> BedrockProviderConfig {
        BedrockProviderConfig {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}
