//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown model specified: {0}")]
    UnknownModel(String),

    #[error("No model is set for the current session")]
    ModelUnset,

    #[error("Invalid prompt entry: {0}")]
    InvalidPrompt(String),
}

impl DomainError {
    /// Check if this error stems from prompt list misconfiguration
    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::UnknownModel(_) | DomainError::ModelUnset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_display() {
        let error = DomainError::UnknownModel("dalle".to_string());
        assert_eq!(error.to_string(), "Unknown model specified: dalle");
    }

    #[test]
    fn test_is_configuration_check() {
        assert!(DomainError::ModelUnset.is_configuration());
        assert!(DomainError::UnknownModel("x".to_string()).is_configuration());
        assert!(!DomainError::InvalidPrompt("empty".to_string()).is_configuration());
    }
}
