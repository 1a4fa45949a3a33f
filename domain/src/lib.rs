//! Domain layer for preference-kiosk
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session is one prompt cycle: a prompt is staged, two candidate outputs
//! are generated by the same backend, a human presses one of two buttons,
//! and the choice is persisted as a [`PreferenceRecord`].
//!
//! ## Model kinds
//!
//! - **Text** (`claude`): two sampled completions of the same prompt
//! - **Image** (`sdxl`): two diffusion renders with independent seeds

pub mod core;
pub mod prompt;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, model::ModelKind};
pub use prompt::{cursor::PromptCursor, entry::PromptEntry};
pub use providers::{BedrockProviderConfig, ImageGenerationParams, TextGenerationParams};
pub use session::{
    entities::{Session, SessionSnapshot},
    preference::{Candidate, CandidateSlot, Preference},
    record::{PreferenceRecord, format_timestamp},
    state::SessionState,
};
