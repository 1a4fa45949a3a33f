//! Presentation layer for preference-kiosk
//!
//! This crate contains the CLI definition, console stand-ins for the
//! kiosk buttons, output formatters and the generation spinner.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use input::keys::{KioskCommand, parse_key, spawn_stdin_reader};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::GenerationSpinner;
