//! Human preference and candidate outputs

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Which candidate the human preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    A,
    B,
}

impl Preference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::A => "a",
            Preference::B => "b",
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two result slots of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSlot {
    A,
    B,
}

/// One generated candidate output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Completion text from the text model
    Text(String),
    /// Raw image bytes from the image model
    Image(Vec<u8>),
}

impl Candidate {
    /// Payload as stored in result records: text verbatim, images as base64
    pub fn to_record_string(&self) -> String {
        match self {
            Candidate::Text(text) => text.clone(),
            Candidate::Image(bytes) => BASE64.encode(bytes),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Candidate::Text(text) => Some(text),
            Candidate::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&[u8]> {
        match self {
            Candidate::Image(bytes) => Some(bytes),
            Candidate::Text(_) => None,
        }
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        match self {
            Candidate::Text(text) => text.len(),
            Candidate::Image(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
