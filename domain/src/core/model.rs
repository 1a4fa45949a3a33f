//! Model kind value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which generative backend a prompt is routed to (Value Object)
///
/// The set is closed: prompt lists are validated against it when they are
/// loaded, so a live session never carries an unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Chat-style text completion model (`claude`)
    Text,
    /// Image diffusion model (`sdxl`)
    Image,
}

impl ModelKind {
    /// Get the wire tag used in prompt lists and result records
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Text => "claude",
            ModelKind::Image => "sdxl",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ModelKind::Text)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ModelKind::Image)
    }

    /// All known kinds, in tag order
    pub fn all() -> [ModelKind; 2] {
        [ModelKind::Text, ModelKind::Image]
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(ModelKind::Text),
            "sdxl" => Ok(ModelKind::Image),
            other => Err(DomainError::UnknownModel(other.to_string())),
        }
    }
}

impl Serialize for ModelKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_roundtrip() {
        for kind in ModelKind::all() {
            let parsed: ModelKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "gpt-4".parse::<ModelKind>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownModel(ref tag) if tag == "gpt-4"));
    }

    #[test]
    fn test_deserialize_unknown_tag_fails() {
        let result: Result<ModelKind, _> = serde_json::from_str("\"dalle\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_family_detection() {
        assert!(ModelKind::Text.is_text());
        assert!(ModelKind::Image.is_image());
        assert!(!ModelKind::Text.is_image());
    }
}
