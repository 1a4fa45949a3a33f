//! Inference provider adapters

#[cfg(feature = "bedrock")]
pub mod bedrock;
