//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelKind`] — the two generative backends (text, image)
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
