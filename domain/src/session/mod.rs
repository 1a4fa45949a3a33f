//! Kiosk session domain.
//!
//! - [`entities::Session`] — one prompt cycle from staging to persistence
//! - [`state::SessionState`] — the controller's state machine states
//! - [`preference::Preference`] / [`preference::Candidate`] — the human's choice and what it chose between
//! - [`record::PreferenceRecord`] — what gets written to disk

pub mod entities;
pub mod preference;
pub mod record;
pub mod state;
