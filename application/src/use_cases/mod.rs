//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generation;
pub mod session_controller;
