//! One pretty-printed JSON file per session.
//!
//! Records land in `<dir>/<session_id>.json`, written to a temporary name
//! first and renamed so an uploader never picks up a half-written file.

use async_trait::async_trait;
use kiosk_application::ports::result_store::{ResultStore, ResultStoreError};
use kiosk_domain::PreferenceRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// [`ResultStore`] writing JSON files into a directory
pub struct JsonResultStore {
    dir: PathBuf,
}

impl JsonResultStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the record for `session_id` is written to
    pub fn record_path(&self, session_id: Uuid) -> PathBuf {
        self.dir.join(format!("{session_id}.json"))
    }

    /// Serialize with four-space indentation.
    fn to_pretty_json(record: &PreferenceRecord) -> Result<Vec<u8>, ResultStoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        record
            .serialize(&mut serializer)
            .map_err(|e| ResultStoreError::Serialize(e.to_string()))?;
        Ok(buf)
    }
}

#[async_trait]
impl ResultStore for JsonResultStore {
    async fn save(
        &self,
        session_id: Uuid,
        record: &PreferenceRecord,
    ) -> Result<String, ResultStoreError> {
        let json = Self::to_pretty_json(record)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ResultStoreError::Io(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.record_path(session_id);
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json)
            .await
            .map_err(|e| ResultStoreError::Io(format!("{}: {}", tmp_path.display(), e)))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| ResultStoreError::Io(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = json.len(), "Wrote result record");
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use kiosk_domain::{ModelKind, Preference};

    fn record() -> PreferenceRecord {
        PreferenceRecord::new(
            Local::now(),
            "write a haiku",
            ModelKind::Text,
            "old pond",
            "frog jumps",
            Preference::B,
        )
    }

    #[tokio::test]
    async fn test_save_writes_record_keyed_by_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonResultStore::new(dir.path().join("results"));
        let session_id = Uuid::new_v4();

        let location = store.save(session_id, &record()).await.unwrap();
        assert_eq!(location, store.record_path(session_id).display().to_string());

        let text = std::fs::read_to_string(store.record_path(session_id)).unwrap();
        assert!(text.contains("\n    \"human_preference\": \"b\""));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["instruction"], "write a haiku");
        assert_eq!(value["prompt"], "write a haiku");
        assert_eq!(value["model"], "claude");
        assert_eq!(value["result_a"], "old pond");
        assert_eq!(value["result_b"], "frog jumps");

        let leftovers: Vec<_> = std::fs::read_dir(store.dir())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_save_into_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let store = JsonResultStore::new(&blocker);
        let err = store.save(Uuid::new_v4(), &record()).await.unwrap_err();
        assert!(matches!(err, ResultStoreError::Io(_)));
    }
}
