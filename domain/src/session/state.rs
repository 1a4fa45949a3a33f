//! Session state machine states

use crate::core::model::ModelKind;
use crate::session::preference::Preference;
use serde::{Deserialize, Serialize};

/// State of the live session (Value Object)
///
/// Text and image sessions walk parallel paths:
/// `TRANSCRIBING → INFERENCE_*_A → INFERENCE_*_B → REVIEW_* → SELECT_{A,B}_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Initializing,
    Error,
    Transcribing,
    InferenceTxtA,
    InferenceTxtB,
    ReviewTxt,
    SelectATxt,
    SelectBTxt,
    InferenceImgA,
    InferenceImgB,
    ReviewImg,
    SelectAImg,
    SelectBImg,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Initializing => "INITIALIZING",
            SessionState::Error => "ERROR",
            SessionState::Transcribing => "TRANSCRIBING",
            SessionState::InferenceTxtA => "INFERENCE_TXT_A",
            SessionState::InferenceTxtB => "INFERENCE_TXT_B",
            SessionState::ReviewTxt => "REVIEW_TXT",
            SessionState::SelectATxt => "SELECT_A_TXT",
            SessionState::SelectBTxt => "SELECT_B_TXT",
            SessionState::InferenceImgA => "INFERENCE_IMG_A",
            SessionState::InferenceImgB => "INFERENCE_IMG_B",
            SessionState::ReviewImg => "REVIEW_IMG",
            SessionState::SelectAImg => "SELECT_A_IMG",
            SessionState::SelectBImg => "SELECT_B_IMG",
        }
    }

    /// State while candidate A is being generated
    pub fn inference_a(model: ModelKind) -> Self {
        match model {
            ModelKind::Text => SessionState::InferenceTxtA,
            ModelKind::Image => SessionState::InferenceImgA,
        }
    }

    /// State while candidate B is being generated
    pub fn inference_b(model: ModelKind) -> Self {
        match model {
            ModelKind::Text => SessionState::InferenceTxtB,
            ModelKind::Image => SessionState::InferenceImgB,
        }
    }

    /// State once both candidates are ready for the human
    pub fn review(model: ModelKind) -> Self {
        match model {
            ModelKind::Text => SessionState::ReviewTxt,
            ModelKind::Image => SessionState::ReviewImg,
        }
    }

    /// State after the human picked a candidate
    pub fn selected(model: ModelKind, preference: Preference) -> Self {
        match (model, preference) {
            (ModelKind::Text, Preference::A) => SessionState::SelectATxt,
            (ModelKind::Text, Preference::B) => SessionState::SelectBTxt,
            (ModelKind::Image, Preference::A) => SessionState::SelectAImg,
            (ModelKind::Image, Preference::B) => SessionState::SelectBImg,
        }
    }

    /// Whether a backend call is in flight in this state
    pub fn is_inference(&self) -> bool {
        matches!(
            self,
            SessionState::InferenceTxtA
                | SessionState::InferenceTxtB
                | SessionState::InferenceImgA
                | SessionState::InferenceImgB
        )
    }

    pub fn is_review(&self) -> bool {
        matches!(self, SessionState::ReviewTxt | SessionState::ReviewImg)
    }

    pub fn is_selected(&self) -> bool {
        matches!(
            self,
            SessionState::SelectATxt
                | SessionState::SelectBTxt
                | SessionState::SelectAImg
                | SessionState::SelectBImg
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_path() {
        assert_eq!(SessionState::inference_a(ModelKind::Text), SessionState::InferenceTxtA);
        assert_eq!(SessionState::inference_b(ModelKind::Text), SessionState::InferenceTxtB);
        assert_eq!(SessionState::review(ModelKind::Text), SessionState::ReviewTxt);
        assert_eq!(
            SessionState::selected(ModelKind::Text, Preference::B),
            SessionState::SelectBTxt
        );
    }

    #[test]
    fn test_image_path() {
        assert_eq!(SessionState::inference_a(ModelKind::Image), SessionState::InferenceImgA);
        assert_eq!(SessionState::review(ModelKind::Image), SessionState::ReviewImg);
        assert_eq!(
            SessionState::selected(ModelKind::Image, Preference::A),
            SessionState::SelectAImg
        );
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&SessionState::InferenceImgB).unwrap();
        assert_eq!(json, "\"INFERENCE_IMG_B\"");
        assert_eq!(SessionState::InferenceImgB.as_str(), "INFERENCE_IMG_B");
    }

    #[test]
    fn test_phase_predicates() {
        assert!(SessionState::InferenceTxtB.is_inference());
        assert!(!SessionState::ReviewTxt.is_inference());
        assert!(SessionState::ReviewImg.is_review());
        assert!(SessionState::SelectAImg.is_selected());
        assert!(!SessionState::Transcribing.is_selected());
    }
}
