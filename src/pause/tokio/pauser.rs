use std::sync::Arc;

use tokio::sync::mpsc;

use crate::pause::{
    config::PauseRequest,
    error::PauseError,
    event::PauseEvent,
    process::control::{NativeController, ProcessController},
    tokio::session::PauseSession,
};

/// Request interface for a presentation layer
///
/// `Pauser` accepts "pause this name for this long" and "cancel now"
/// requests and runs at most one [`PauseSession`] at a time. All session
/// events go to the channel given at construction.
///
/// # Examples
///
/// ```rust,no_run
/// use process_pauser::pause::{event::PauseEvent, tokio::pauser::Pauser};
/// use tokio::sync::mpsc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (tx, mut rx) = mpsc::channel(128);
///     let mut pauser = Pauser::native(tx);
///
///     // Duration text comes straight from an input field and is clamped to [1, 999]
///     pauser.start_pause("GTA5.exe", "10").await?;
///
///     while let Some(event) = rx.recv().await {
///         if event.is_terminal() {
///             break;
///         }
///     }
///     pauser.shutdown().await?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Pauser<C: ProcessController = NativeController> {
    controller: Arc<C>,
    event_tx: mpsc::Sender<PauseEvent>,
    session: Option<PauseSession<C>>,
}

impl Pauser<NativeController> {
    /// Creates a pauser driving real processes.
    pub fn native(event_tx: mpsc::Sender<PauseEvent>) -> Self {
        Self::new(Arc::new(NativeController::new()), event_tx)
    }
}

impl<C: ProcessController> Pauser<C> {
    pub fn new(controller: Arc<C>, event_tx: mpsc::Sender<PauseEvent>) -> Self {
        Self {
            controller,
            event_tx,
            session: None,
        }
    }

    /// Starts pausing `process_name` for the duration typed in `duration_text`.
    ///
    /// The duration is parsed leniently and clamped into `[1, 999]` seconds,
    /// so values such as `"0"` or `"5000"` never reach the controller as-is.
    ///
    /// # Errors
    ///
    /// - [`PauseError::SessionActive`] if a session is still suspending; no
    ///   event is emitted and nothing is touched
    /// - any error from [`PauseSession::start`], which is also emitted as an
    ///   `Error` event
    pub async fn start_pause(
        &mut self,
        process_name: &str,
        duration_text: &str,
    ) -> Result<(), PauseError> {
        self.start_request(PauseRequest::from_input(process_name, duration_text))
            .await
    }

    /// Starts a session for an already-built request. The request is
    /// validated, not clamped.
    ///
    /// # Errors
    ///
    /// Same as [`start_pause`](Self::start_pause).
    pub async fn start_request(&mut self, request: PauseRequest) -> Result<(), PauseError> {
        if self.is_active() {
            #[cfg(feature = "tracing")]
            tracing::warn!(name = request.process_name(), "Pause already in progress");
            return Err(PauseError::SessionActive);
        }

        // A settled session may still be delivering its last events; it
        // finishes on its own once the consumer makes room.
        if let Some(_previous) = self.session.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!(phase = ?_previous.phase(), "Replacing previous session");
        }

        let mut session =
            PauseSession::new(request, self.controller.clone(), self.event_tx.clone());
        let result = session.start().await;
        self.session = Some(session);
        result
    }

    /// Resumes the paused process now. A no-op when no session is active.
    ///
    /// Safe to call from the task that reads events, even when the event
    /// channel is full.
    ///
    /// # Errors
    ///
    /// See [`PauseSession::cancel`].
    pub async fn cancel_pause(&mut self) -> Result<(), PauseError> {
        match self.session.as_mut() {
            Some(session) => session.cancel().await,
            None => Ok(()),
        }
    }

    /// Cancels any active session and stops its tracking task, leaving no
    /// background work behind. See [`PauseSession::close`].
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::Thread`] if the tracking task panicked.
    pub async fn shutdown(&mut self) -> Result<(), PauseError> {
        if let Some(mut session) = self.session.take() {
            session.close().await?;
        }
        Ok(())
    }

    /// Whether a session currently holds a suspended process.
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.is_active())
    }

    /// The current or most recent session.
    pub fn session(&self) -> Option<&PauseSession<C>> {
        self.session.as_ref()
    }
}
