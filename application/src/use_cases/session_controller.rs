//! Session controller use case
//!
//! Owns the single live [`Session`] and drives it through the kiosk cycle:
//!
//! ```text
//! initialize ─► reset ─► generate A ─► generate B ─► review ─► choice ─► save ─┐
//!                 ▲                                                             │
//!                 └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Button handlers can fire from any task while a generation run is in
//! flight, so session state sits behind a mutex that is never held across
//! an `.await`.

use super::generation::{GenerationHandle, check_cancelled};
use crate::config::ControllerConfig;
use crate::ports::inference_backend::{InferenceBackend, InferenceError};
use crate::ports::prompt_source::{PromptSource, PromptSourceError};
use crate::ports::result_store::ResultStore;
use crate::ports::session_event_logger::{
    NoSessionEventLogger, SessionEvent, SessionEventLogger,
};
use chrono::Local;
use kiosk_domain::{
    Candidate, CandidateSlot, DomainError, ModelKind, Preference, PromptCursor, PromptEntry,
    Session, SessionSnapshot, SessionState,
};
use rand::Rng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Errors surfaced by the session controller
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Failed to load prompts: {0}")]
    PromptLoad(#[from] PromptSourceError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] DomainError),

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("Generation cancelled")]
    Cancelled,

    #[error("Generation task failed: {0}")]
    TaskFailed(String),
}

impl ControllerError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ControllerError::Cancelled)
    }

    /// Misconfiguration of the prompt list rather than a transient fault
    pub fn is_configuration(&self) -> bool {
        matches!(self, ControllerError::Configuration(_))
    }
}

/// Mutable state guarded by the controller's lock
struct ControllerState {
    session: Session,
    cursor: PromptCursor,
    /// Set once prompt loading failed; no further work is done.
    halted: bool,
    /// The registered generation run, if any.
    generation: Option<ActiveGeneration>,
    next_generation_id: u64,
}

struct ActiveGeneration {
    id: u64,
    token: CancellationToken,
}

/// What a run needs to know about itself
struct GenerationRun {
    id: u64,
    session_id: Uuid,
    token: CancellationToken,
}

/// Use case coordinating prompt staging, generation, choices and persistence
pub struct SessionController<B: InferenceBackend + 'static> {
    backend: Arc<B>,
    prompt_source: Arc<dyn PromptSource>,
    result_store: Arc<dyn ResultStore>,
    event_logger: Arc<dyn SessionEventLogger>,
    config: ControllerConfig,
    inner: Mutex<ControllerState>,
}

impl<B: InferenceBackend + 'static> SessionController<B> {
    pub fn new(
        backend: Arc<B>,
        prompt_source: Arc<dyn PromptSource>,
        result_store: Arc<dyn ResultStore>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            backend,
            prompt_source,
            result_store,
            event_logger: Arc::new(NoSessionEventLogger),
            config,
            inner: Mutex::new(ControllerState {
                session: Session::new(),
                cursor: PromptCursor::default(),
                halted: false,
                generation: None,
                next_generation_id: 0,
            }),
        }
    }

    /// Set the session event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn SessionEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Lifecycle ====================

    /// Load the prompt list and stage the first session.
    ///
    /// A load failure moves the session to `ERROR` and halts the controller.
    pub async fn initialize(&self) -> Result<(), ControllerError> {
        match self.prompt_source.load().await {
            Ok(prompts) => {
                info!("Found {} prompts", prompts.len());
                {
                    let mut inner = self.lock();
                    inner.cursor = PromptCursor::new(prompts);
                    inner.halted = false;
                }
                self.reset_session();
                Ok(())
            }
            Err(e) => {
                error!("An error occurred while loading prompts: {}", e);
                {
                    let mut inner = self.lock();
                    inner.session.fail(e.to_string());
                    inner.halted = true;
                }
                self.event_logger.log(SessionEvent::new(
                    "prompt_load_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                Err(ControllerError::PromptLoad(e))
            }
        }
    }

    /// Start a new session on the next prompt.
    ///
    /// Cancels any registered generation run. Returns the staged entry, or
    /// `None` when no prompts are loaded (the session is still reset).
    pub fn reset_session(&self) -> Option<PromptEntry> {
        let mut inner = self.lock();
        if inner.halted {
            warn!("Controller halted after prompt load failure; ignoring reset");
            return None;
        }

        if let Some(active) = inner.generation.take() {
            debug!(generation = active.id, "Cancelling generation on reset");
            active.token.cancel();
        }

        let entry = inner.cursor.advance().cloned();
        inner.session.reset(entry.as_ref());
        let session_id = inner.session.id();
        let position = inner.cursor.position();
        drop(inner);

        match &entry {
            Some(entry) => {
                info!(
                    session_id = %session_id,
                    model = %entry.model,
                    "Staged prompt: {}",
                    entry.prompt
                );
                self.event_logger.log(SessionEvent::new(
                    "session_started",
                    serde_json::json!({
                        "session_id": session_id.to_string(),
                        "prompt": entry.prompt,
                        "model": entry.model.as_str(),
                        "next_index": position,
                    }),
                ));
            }
            None => warn!(session_id = %session_id, "No prompts are loaded"),
        }
        entry
    }

    // ==================== Generation ====================

    /// Run the generation pipeline for the staged prompt on the current task.
    pub async fn run_generation(&self) -> Result<(), ControllerError> {
        let run = self.register_generation();
        self.drive_generation(run).await
    }

    /// Run the generation pipeline on a background task.
    ///
    /// Button handlers stay responsive while the backend is called; a
    /// [`reset_session`](Self::reset_session) cancels the run.
    pub fn spawn_generation(self: &Arc<Self>) -> GenerationHandle {
        let run = self.register_generation();
        let token = run.token.clone();
        let controller = Arc::clone(self);
        let join = tokio::spawn(async move { controller.drive_generation(run).await });
        GenerationHandle::new(token, join)
    }

    /// Register a run bound to the session that is live right now.
    fn register_generation(&self) -> GenerationRun {
        let mut inner = self.lock();
        if let Some(previous) = inner.generation.take() {
            previous.token.cancel();
        }
        let id = inner.next_generation_id;
        inner.next_generation_id += 1;
        let token = CancellationToken::new();
        inner.generation = Some(ActiveGeneration {
            id,
            token: token.clone(),
        });
        GenerationRun {
            id,
            session_id: inner.session.id(),
            token,
        }
    }

    async fn drive_generation(&self, run: GenerationRun) -> Result<(), ControllerError> {
        let generation_id = run.id;
        let result = self.generate_pair(run.session_id, &run.token).await;

        // The run has served its purpose; release its registration.
        let mut inner = self.lock();
        if inner
            .generation
            .as_ref()
            .is_some_and(|active| active.id == generation_id)
            && let Some(active) = inner.generation.take()
        {
            active.token.cancel();
        }
        result
    }

    async fn generate_pair(
        &self,
        session_id: Uuid,
        token: &CancellationToken,
    ) -> Result<(), ControllerError> {
        let (prompt, model) = {
            let mut inner = self.lock();
            if token.is_cancelled() || inner.session.id() != session_id {
                debug!(session_id = %session_id, "Generation superseded before it started");
                return Err(ControllerError::Cancelled);
            }
            let model = inner.session.require_model()?;
            let prompt = inner.session.prompt().unwrap_or_default().to_string();
            inner.session.set_state(SessionState::inference_a(model));
            (prompt, model)
        };

        info!(session_id = %session_id, model = %model, "Generating candidates");

        let steps = [
            (CandidateSlot::A, SessionState::inference_b(model)),
            (CandidateSlot::B, SessionState::review(model)),
        ];
        for (slot, next_state) in steps {
            check_cancelled(token)?;
            let candidate = match self.generate_candidate(model, &prompt).await {
                Ok(candidate) => candidate,
                Err(e) => return Err(self.fail_generation(session_id, token, e)),
            };
            debug!(
                session_id = %session_id,
                slot = ?slot,
                bytes = candidate.len(),
                "Candidate ready"
            );
            self.commit(session_id, token, |session| {
                session.set_result(slot, candidate);
                session.set_state(next_state);
            })?;
        }

        info!(session_id = %session_id, "Both candidates ready for review");
        self.event_logger.log(SessionEvent::new(
            "generation_completed",
            serde_json::json!({
                "session_id": session_id.to_string(),
                "model": model.as_str(),
            }),
        ));
        Ok(())
    }

    async fn generate_candidate(
        &self,
        model: ModelKind,
        prompt: &str,
    ) -> Result<Candidate, InferenceError> {
        match model {
            ModelKind::Text => self.backend.generate_text(prompt).await.map(Candidate::Text),
            ModelKind::Image => {
                let seed = rand::thread_rng().gen_range(0..=self.config.seed_max);
                debug!(seed, "Requesting image");
                self.backend
                    .generate_image(prompt, seed)
                    .await
                    .map(Candidate::Image)
            }
        }
    }

    /// Apply `update` only if the run still owns the live session.
    fn commit(
        &self,
        session_id: Uuid,
        token: &CancellationToken,
        update: impl FnOnce(&mut Session),
    ) -> Result<(), ControllerError> {
        let mut inner = self.lock();
        if token.is_cancelled() || inner.session.id() != session_id {
            debug!(session_id = %session_id, "Discarding output of a superseded generation");
            return Err(ControllerError::Cancelled);
        }
        update(&mut inner.session);
        Ok(())
    }

    /// Mark the live session failed, unless the run was superseded meanwhile.
    fn fail_generation(
        &self,
        session_id: Uuid,
        token: &CancellationToken,
        e: InferenceError,
    ) -> ControllerError {
        if let Err(cancelled) =
            self.commit(session_id, token, |session| session.fail(e.to_string()))
        {
            debug!(session_id = %session_id, "Ignoring failure of a superseded generation: {}", e);
            return cancelled;
        }
        error!(session_id = %session_id, "Generation failed: {}", e);
        self.event_logger.log(SessionEvent::new(
            "generation_failed",
            serde_json::json!({
                "session_id": session_id.to_string(),
                "error": e.to_string(),
            }),
        ));
        ControllerError::Inference(e)
    }

    // ==================== Human input ====================

    /// Handler for the "choice A" button (red)
    pub fn on_choice_a(&self) -> Result<SessionState, ControllerError> {
        self.on_choice(Preference::A)
    }

    /// Handler for the "choice B" button (blue)
    pub fn on_choice_b(&self) -> Result<SessionState, ControllerError> {
        self.on_choice(Preference::B)
    }

    fn on_choice(&self, preference: Preference) -> Result<SessionState, ControllerError> {
        let (session_id, state) = {
            let mut inner = self.lock();
            let state = inner.session.record_choice(preference)?;
            (inner.session.id(), state)
        };

        info!(session_id = %session_id, state = %state, "Button {} pressed", preference);
        self.event_logger.log(SessionEvent::new(
            "choice_recorded",
            serde_json::json!({
                "session_id": session_id.to_string(),
                "preference": preference.as_str(),
            }),
        ));
        Ok(state)
    }

    // ==================== Persistence ====================

    /// Persist the session if a preference was recorded, then reset.
    ///
    /// Storage failures are logged and noted on the session; the kiosk
    /// advances regardless. Returns where the record was written.
    pub async fn save_and_advance(&self) -> Option<String> {
        let pending = {
            let inner = self.lock();
            inner
                .session
                .to_record(Local::now())
                .map(|record| (inner.session.id(), record))
        };

        let mut saved = None;
        match pending {
            Some((session_id, record)) => match self.result_store.save(session_id, &record).await {
                Ok(location) => {
                    info!(session_id = %session_id, "Saved result to {}", location);
                    self.event_logger.log(SessionEvent::new(
                        "result_saved",
                        serde_json::json!({
                            "session_id": session_id.to_string(),
                            "location": location,
                            "preference": record.human_preference.as_str(),
                        }),
                    ));
                    saved = Some(location);
                }
                Err(e) => {
                    warn!(session_id = %session_id, "An error occurred while saving results: {}", e);
                    self.lock().session.note_error(e.to_string());
                    self.event_logger.log(SessionEvent::new(
                        "result_save_failed",
                        serde_json::json!({
                            "session_id": session_id.to_string(),
                            "error": e.to_string(),
                        }),
                    ));
                }
            },
            None => debug!("No preference recorded; skipping save"),
        }

        self.reset_session();
        saved
    }

    // ==================== Accessors ====================

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().session.snapshot()
    }

    /// Copy of the live session, including candidate payloads
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn state(&self) -> SessionState {
        self.lock().session.state()
    }

    pub fn prompt_count(&self) -> usize {
        self.lock().cursor.len()
    }

    pub fn is_halted(&self) -> bool {
        self.lock().halted
    }

    /// Whether a generation run is registered and not yet released
    pub fn is_generating(&self) -> bool {
        self.lock()
            .generation
            .as_ref()
            .is_some_and(|active| !active.token.is_cancelled())
    }
}
