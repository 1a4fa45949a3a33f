//! Infrastructure layer for preference-kiosk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod prompts;
pub mod providers;
pub mod results;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileBedrockConfig, FileConfig, FileImageConfig, FileTextConfig,
    Severity,
};
pub use logging::JsonlSessionEventLogger;
pub use prompts::JsonPromptFile;
#[cfg(feature = "bedrock")]
pub use providers::bedrock::BedrockInferenceBackend;
pub use results::JsonResultStore;
