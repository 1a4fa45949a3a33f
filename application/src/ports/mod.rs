//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod inference_backend;
pub mod prompt_source;
pub mod result_store;
pub mod session_event_logger;
