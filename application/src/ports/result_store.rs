//! Result store port

use async_trait::async_trait;
use kiosk_domain::PreferenceRecord;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ResultStoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Persists one record per completed session for later upload.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Write `record` keyed by `session_id`, returning where it landed.
    async fn save(
        &self,
        session_id: Uuid,
        record: &PreferenceRecord,
    ) -> Result<String, ResultStoreError>;
}
