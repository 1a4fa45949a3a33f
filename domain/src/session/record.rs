//! Persisted preference record

use crate::core::model::ModelKind;
use crate::session::preference::Preference;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One completed, preference-recorded session as written to disk.
///
/// `instruction` and `prompt` carry the same text; downstream upload jobs
/// read either name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub timestamp: String,
    pub instruction: String,
    pub model: ModelKind,
    pub prompt: String,
    pub result_a: String,
    pub result_b: String,
    pub human_preference: Preference,
}

impl PreferenceRecord {
    pub fn new(
        timestamp: DateTime<Local>,
        prompt: impl Into<String>,
        model: ModelKind,
        result_a: impl Into<String>,
        result_b: impl Into<String>,
        human_preference: Preference,
    ) -> Self {
        let prompt = prompt.into();
        Self {
            timestamp: format_timestamp(&timestamp),
            instruction: prompt.clone(),
            model,
            prompt,
            result_a: result_a.into(),
            result_b: result_b.into(),
            human_preference,
        }
    }
}

/// Local wall-clock time with microseconds, e.g. `2024-03-01 14:02:11.532100`
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
