//! Prompt list adapters

mod json_file;

pub use json_file::JsonPromptFile;
