use std::{sync::Arc, time::SystemTime};

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::{
    helper::tracing::MaybeInstrument,
    pause::{
        config::{PauseRequest, TOTAL_TICKS},
        error::PauseError,
        event::PauseEvent,
        process::control::{NativeController, ProcessController},
        state::SessionPhase,
        tokio::context::SessionContext,
    },
};

/// One attempt to pause a named process for a bounded duration
///
/// `PauseSession` resolves and suspends the process in [`start`](Self::start),
/// then hands it to a background tracking task that emits progress, watches
/// for the process dying, and resumes it when the time is up. The
/// foreground keeps this handle to read status, [`cancel`](Self::cancel) early,
/// and [`join`](Self::join) the task.
///
/// A session is single-use. Whatever the exit path (timeout, cancel, death,
/// or dropping the handle), at most one resume reaches the controller, and
/// none when the process is already dead.
///
/// Dropping a running session sends the cancel signal; the detached task
/// still resumes the process as long as the runtime is alive. Resume is
/// best-effort: a failing resume is reported and the session ends `Failed`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use process_pauser::pause::{
///     config::PauseRequest,
///     process::control::NativeController,
///     tokio::session::PauseSession,
/// };
/// use tokio::sync::mpsc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (tx, mut rx) = mpsc::channel(128);
///     let request = PauseRequest::new("notepad.exe", 5);
///     let mut session = PauseSession::new(request, Arc::new(NativeController::new()), tx);
///
///     session.start().await?;
///
///     // Resume after the first few ticks
///     while let Some(event) = rx.recv().await {
///         if let process_pauser::pause::event::PauseEvent::Progress { tick: 3 } = event {
///             session.cancel().await?;
///             break;
///         }
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct PauseSession<C: ProcessController = NativeController> {
    pub(crate) shared_context: Arc<SessionContext>,
    controller: Arc<C>,
    event_tx: mpsc::Sender<PauseEvent>,
    cancel_tx: Option<oneshot::Sender<()>>,
    tracker: Option<JoinHandle<()>>,
}

impl<C: ProcessController> PauseSession<C> {
    /// Creates an idle session. Nothing is touched until [`start`](Self::start).
    pub fn new(
        request: PauseRequest,
        controller: Arc<C>,
        event_tx: mpsc::Sender<PauseEvent>,
    ) -> Self {
        Self {
            shared_context: Arc::new(SessionContext::new(request)),
            controller,
            event_tx,
            cancel_tx: None,
            tracker: None,
        }
    }

    /// Validates the request, resolves and suspends the process, then spawns
    /// the tracking task, which emits `Started` first.
    ///
    /// Returns once the process is suspended; the caller is never blocked
    /// for the pause itself.
    ///
    /// # Errors
    ///
    /// Validation, resolve and suspend failures are emitted as a terminal
    /// `Error` event, leave the session `Failed`, and are returned as well.
    /// No process is touched when validation or resolution fails.
    /// Starting a session twice returns [`PauseError::InvalidInput`].
    pub async fn start(&mut self) -> Result<(), PauseError> {
        if self.tracker.is_some() || self.shared_context.get_phase() != SessionPhase::Idle {
            return Err(PauseError::InvalidInput(
                "Pause session can only be started once".to_string(),
            ));
        }

        let shared_context = self.shared_context.clone();
        let request = &shared_context.request;

        if let Err(e) = request.validate() {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %e, "Invalid pause request");
            return self.fail(e).await;
        }

        let handle = match self.controller.resolve(request.process_name()) {
            Ok(handle) => handle,
            Err(e) => return self.fail(e).await,
        };

        if let Err(e) = self.controller.suspend(&handle) {
            return self.fail(e).await;
        }

        let process_id = handle.process_id();
        shared_context.set_process_id(process_id);
        shared_context.set_elapsed_ticks(0);
        shared_context.set_total_ticks(TOTAL_TICKS);
        let started_at = shared_context.set_started_at();
        shared_context.set_phase(SessionPhase::Suspending);

        #[cfg(feature = "tracing")]
        tracing::info!(
            pid = process_id,
            name = request.process_name(),
            duration_seconds = request.duration_seconds(),
            "Process suspended"
        );

        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.cancel_tx = Some(cancel_tx);

        let tracker = Self::track(
            shared_context.clone(),
            self.controller.clone(),
            handle,
            self.event_tx.clone(),
            cancel_rx,
            started_at,
        );
        let tracker = tracker.maybe_instrument("pause_tracker", process_id);
        self.tracker = Some(tokio::spawn(tracker));
        Ok(())
    }

    async fn fail(&mut self, error: PauseError) -> Result<(), PauseError> {
        Self::send_error_event_and_fail(&self.shared_context, error.clone(), &self.event_tx, None)
            .await;
        Err(error)
    }

    /// Resumes the process now instead of waiting for the remaining ticks.
    ///
    /// Signals the tracking task and waits until the outcome is final: the
    /// process has been resumed, or found dead, or the resume failed. The
    /// terminal event (`Completed`, `ProcessDied` or `Error`) is already queued
    /// when this returns unless the event channel is full; it then follows
    /// once the consumer makes room. Never waits on the consumer, so it is
    /// safe to call from the task that reads events. A no-op on a session
    /// that is not suspending.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::Thread`] if the tracking task panicked. A failed
    /// resume is reported through the event channel, not here.
    pub async fn cancel(&mut self) -> Result<(), PauseError> {
        if self.shared_context.get_phase() != SessionPhase::Suspending {
            return Ok(());
        }
        if let Some(tx) = self.cancel_tx.take()
            && tx.send(()).is_err()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("Tracking task already finished before cancel");
        }
        self.wait_settled().await
    }

    async fn wait_settled(&mut self) -> Result<(), PauseError> {
        let shared_context = self.shared_context.clone();
        let Some(tracker) = self.tracker.as_mut() else {
            return Ok(());
        };
        let joined = tokio::select! {
            result = tracker => Some(result),
            _ = shared_context.settled() => None,
        };
        if let Some(result) = joined {
            self.tracker = None;
            result?;
        }
        Ok(())
    }

    /// Cancels the session and stops the tracking task, leaving no background
    /// work behind.
    ///
    /// Closing events that do not fit in the event channel are dropped
    /// rather than waited for.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::Thread`] if the tracking task panicked.
    pub async fn close(&mut self) -> Result<(), PauseError> {
        self.cancel().await?;
        if let Some(tracker) = self.tracker.take() {
            if !tracker.is_finished() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Dropping closing events still waiting for channel capacity");
                tracker.abort();
            }
            match tracker.await {
                Err(e) if e.is_cancelled() => {}
                result => result?,
            }
        }
        Ok(())
    }

    /// Whether the outcome of a started session is final. The tracking task
    /// may still be delivering the last events.
    pub fn is_settled(&self) -> bool {
        self.shared_context.is_settled()
    }

    /// Waits for the tracking task to finish. Returns immediately if it was
    /// never started or has already been joined.
    ///
    /// The task finishes only after its last event is queued, so a caller
    /// must keep the event channel drained (or dropped) while joining.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::Thread`] if the tracking task panicked.
    pub async fn join(&mut self) -> Result<(), PauseError> {
        if let Some(tracker) = self.tracker.take() {
            tracker.await?;
        }
        Ok(())
    }

    pub fn request(&self) -> &PauseRequest {
        &self.shared_context.request
    }

    pub fn phase(&self) -> SessionPhase {
        self.shared_context.get_phase()
    }

    /// Whether the session still holds a suspended process.
    pub fn is_active(&self) -> bool {
        self.phase().is_active()
    }

    pub fn process_id(&self) -> Option<u32> {
        self.shared_context.get_process_id()
    }

    /// Ticks completed so far. Never exceeds [`total_ticks`](Self::total_ticks).
    pub fn elapsed_ticks(&self) -> u32 {
        self.shared_context.get_elapsed_ticks()
    }

    /// Fixed at start; 0 before the process is suspended.
    pub fn total_ticks(&self) -> u32 {
        self.shared_context.get_total_ticks()
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.shared_context.get_started_at()
    }

    pub fn finished_at(&self) -> Option<SystemTime> {
        self.shared_context.get_finished_at()
    }
}

impl<C: ProcessController> Drop for PauseSession<C> {
    fn drop(&mut self) {
        if let Some(tx) = self.cancel_tx.take()
            && self.shared_context.get_phase() == SessionPhase::Suspending
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("Session dropped while suspending, cancelling");
            let _ = tx.send(());
        }
    }
}
