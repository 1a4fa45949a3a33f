//! Prompt list domain.
//!
//! - [`entry::PromptEntry`] — a prompt text paired with the model it targets
//! - [`cursor::PromptCursor`] — cyclic walk over the loaded list

pub mod cursor;
pub mod entry;
