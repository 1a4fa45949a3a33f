//! Background generation task handle.
//!
//! A generation run is a tokio task paired with a [`CancellationToken`].
//! Cancelling never interrupts a backend call in flight; the pipeline checks
//! the token before each call and before each result is committed.

use super::session_controller::ControllerError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Return `Err(ControllerError::Cancelled)` if the token has fired.
pub(crate) fn check_cancelled(token: &CancellationToken) -> Result<(), ControllerError> {
    if token.is_cancelled() {
        return Err(ControllerError::Cancelled);
    }
    Ok(())
}

/// Handle to a spawned generation run
pub struct GenerationHandle {
    token: CancellationToken,
    join: JoinHandle<Result<(), ControllerError>>,
}

impl GenerationHandle {
    pub(crate) fn new(
        token: CancellationToken,
        join: JoinHandle<Result<(), ControllerError>>,
    ) -> Self {
        Self { token, join }
    }

    /// Ask the run to stop at its next suspension boundary.
    ///
    /// No-op once the run has finished.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the run to end and return its outcome.
    pub async fn wait(self) -> Result<(), ControllerError> {
        match self.join.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ControllerError::Cancelled),
            Err(e) => Err(ControllerError::TaskFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_cancelled() {
        let token = CancellationToken::new();
        assert!(check_cancelled(&token).is_ok());
        token.cancel();
        assert!(matches!(
            check_cancelled(&token),
            Err(ControllerError::Cancelled)
        ));
    }

    #[tokio::test]
    async fn test_cancel_after_finish_is_noop() {
        let token = CancellationToken::new();
        let handle = GenerationHandle::new(token, tokio::spawn(async { Ok(()) }));
        tokio::task::yield_now().await;
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(handle.wait().await.is_ok());
    }

    async fn exploding_run() -> Result<(), ControllerError> {
        panic!("backend adapter bug")
    }

    #[tokio::test]
    async fn test_panicking_run_reports_task_failure() {
        let token = CancellationToken::new();
        let handle = GenerationHandle::new(token, tokio::spawn(exploding_run()));
        assert!(matches!(
            handle.wait().await,
            Err(ControllerError::TaskFailed(_))
        ));
    }
}
