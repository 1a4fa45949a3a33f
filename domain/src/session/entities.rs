//! Session domain entities

use crate::core::error::DomainError;
use crate::core::model::ModelKind;
use crate::prompt::entry::PromptEntry;
use crate::session::preference::{Candidate, CandidateSlot, Preference};
use crate::session::record::PreferenceRecord;
use crate::session::state::SessionState;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One prompt cycle at the kiosk (Entity)
///
/// Created by [`Session::reset`], filled by the generation pipeline and the
/// choice handlers, and retired once its record is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    state: SessionState,
    prompt: Option<String>,
    model: Option<ModelKind>,
    result_a: Option<Candidate>,
    result_b: Option<Candidate>,
    human_preference: Option<Preference>,
    button_pressed: bool,
    last_interaction_time: DateTime<Utc>,
    last_error_time: DateTime<Utc>,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session in `INITIALIZING`, before any prompt is staged
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: SessionState::Initializing,
            prompt: None,
            model: None,
            result_a: None,
            result_b: None,
            human_preference: None,
            button_pressed: false,
            last_interaction_time: now,
            last_error_time: now,
            error: None,
        }
    }

    /// Start a new cycle: clear results and preference, draw a new id, and
    /// stage `entry` (or nothing when no prompts are available).
    pub fn reset(&mut self, entry: Option<&PromptEntry>) {
        self.id = Uuid::new_v4();
        self.state = SessionState::Transcribing;
        self.result_a = None;
        self.result_b = None;
        self.human_preference = None;
        self.button_pressed = false;
        self.prompt = entry.map(|e| e.prompt.clone());
        self.model = entry.map(|e| e.model);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn set_state(&mut self, state: SessionState) {
        self.state = state;
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn model(&self) -> Option<ModelKind> {
        self.model
    }

    /// Model of the staged prompt, or `ModelUnset` when nothing is staged
    pub fn require_model(&self) -> Result<ModelKind, DomainError> {
        self.model.ok_or(DomainError::ModelUnset)
    }

    pub fn result_a(&self) -> Option<&Candidate> {
        self.result_a.as_ref()
    }

    pub fn result_b(&self) -> Option<&Candidate> {
        self.result_b.as_ref()
    }

    pub fn set_result(&mut self, slot: CandidateSlot, candidate: Candidate) {
        match slot {
            CandidateSlot::A => self.result_a = Some(candidate),
            CandidateSlot::B => self.result_b = Some(candidate),
        }
    }

    pub fn human_preference(&self) -> Option<Preference> {
        self.human_preference
    }

    pub fn button_pressed(&self) -> bool {
        self.button_pressed
    }

    pub fn last_interaction_time(&self) -> DateTime<Utc> {
        self.last_interaction_time
    }

    pub fn last_error_time(&self) -> DateTime<Utc> {
        self.last_error_time
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Register a button press.
    ///
    /// The model must be known before anything is mutated; a later press in
    /// the same session overwrites an earlier one.
    pub fn record_choice(&mut self, preference: Preference) -> Result<SessionState, DomainError> {
        let model = self.require_model()?;
        self.human_preference = Some(preference);
        self.button_pressed = true;
        self.last_interaction_time = Utc::now();
        self.state = SessionState::selected(model, preference);
        Ok(self.state)
    }

    /// Record a session-level error without leaving the current state
    pub fn note_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.last_error_time = Utc::now();
    }

    /// Record a fatal session error and move to `ERROR`
    pub fn fail(&mut self, message: impl Into<String>) {
        self.note_error(message);
        self.state = SessionState::Error;
    }

    /// Build the record to persist, if a preference was recorded
    pub fn to_record(&self, timestamp: DateTime<Local>) -> Option<PreferenceRecord> {
        let preference = self.human_preference?;
        let model = self.model?;
        let prompt = self.prompt.as_deref()?;

        Some(PreferenceRecord::new(
            timestamp,
            prompt,
            model,
            self.result_a
                .as_ref()
                .map(Candidate::to_record_string)
                .unwrap_or_default(),
            self.result_b
                .as_ref()
                .map(Candidate::to_record_string)
                .unwrap_or_default(),
            preference,
        ))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            state: self.state,
            prompt: self.prompt.clone(),
            model: self.model,
            result_a_ready: self.result_a.is_some(),
            result_b_ready: self.result_b.is_some(),
            human_preference: self.human_preference,
            button_pressed: self.button_pressed,
            last_interaction_time: self.last_interaction_time,
            last_error_time: self.last_error_time,
            error: self.error.clone(),
        }
    }
}

/// Read-only view of a session for presenters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub state: SessionState,
    pub prompt: Option<String>,
    pub model: Option<ModelKind>,
    pub result_a_ready: bool,
    pub result_b_ready: bool,
    pub human_preference: Option<Preference>,
    pub button_pressed: bool,
    pub last_interaction_time: DateTime<Utc>,
    pub last_error_time: DateTime<Utc>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_prompt() -> PromptEntry {
        PromptEntry::new("draw a cat", ModelKind::Image)
    }

    #[test]
    fn test_new_session_is_initializing() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Initializing);
        assert!(session.model().is_none());
        assert!(session.human_preference().is_none());
    }

    #[test]
    fn test_reset_clears_previous_cycle() {
        let mut session = Session::new();
        session.reset(Some(&cat_prompt()));
        session.set_result(CandidateSlot::A, Candidate::Image(vec![1]));
        session.set_result(CandidateSlot::B, Candidate::Image(vec![2]));
        session.record_choice(Preference::B).unwrap();
        let old_id = session.id();

        session.reset(Some(&cat_prompt()));

        assert_eq!(session.state(), SessionState::Transcribing);
        assert!(session.result_a().is_none());
        assert!(session.result_b().is_none());
        assert!(session.human_preference().is_none());
        assert!(!session.button_pressed());
        assert_ne!(session.id(), old_id);
    }

    #[test]
    fn test_reset_without_prompt_leaves_model_unset() {
        let mut session = Session::new();
        session.reset(Some(&cat_prompt()));
        session.reset(None);
        assert!(session.prompt().is_none());
        assert_eq!(session.require_model(), Err(DomainError::ModelUnset));
    }

    #[test]
    fn test_record_choice_last_press_wins() {
        let mut session = Session::new();
        session.reset(Some(&PromptEntry::new("write a haiku", ModelKind::Text)));

        assert_eq!(session.record_choice(Preference::A).unwrap(), SessionState::SelectATxt);
        assert_eq!(session.record_choice(Preference::B).unwrap(), SessionState::SelectBTxt);
        assert_eq!(session.human_preference(), Some(Preference::B));
        assert!(session.button_pressed());
    }

    #[test]
    fn test_record_choice_without_model_does_not_mutate() {
        let mut session = Session::new();
        let before = session.snapshot();

        assert_eq!(session.record_choice(Preference::A), Err(DomainError::ModelUnset));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_to_record_requires_preference() {
        let mut session = Session::new();
        session.reset(Some(&PromptEntry::new("write a haiku", ModelKind::Text)));
        session.set_result(CandidateSlot::A, Candidate::Text("one".to_string()));
        session.set_result(CandidateSlot::B, Candidate::Text("two".to_string()));
        assert!(session.to_record(Local::now()).is_none());

        session.record_choice(Preference::A).unwrap();
        let record = session.to_record(Local::now()).unwrap();
        assert_eq!(record.result_a, "one");
        assert_eq!(record.result_b, "two");
        assert_eq!(record.human_preference, Preference::A);
        assert_eq!(record.instruction, record.prompt);
    }

    #[test]
    fn test_fail_moves_to_error() {
        let mut session = Session::new();
        session.fail("backend down");
        assert_eq!(session.state(), SessionState::Error);
        assert_eq!(session.error(), Some("backend down"));
    }
}
