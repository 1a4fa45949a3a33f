//! Application layer for preference-kiosk
//!
//! This crate contains the session controller use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ControllerConfig;
pub use ports::{
    inference_backend::{InferenceBackend, InferenceError},
    prompt_source::{PromptSource, PromptSourceError},
    result_store::{ResultStore, ResultStoreError},
    session_event_logger::{NoSessionEventLogger, SessionEvent, SessionEventLogger},
};
pub use use_cases::generation::GenerationHandle;
pub use use_cases::session_controller::{ControllerError, SessionController};
