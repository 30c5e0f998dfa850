use tokio::sync::{
    mpsc::{self, error::TrySendError},
    oneshot,
};

use crate::pause::{
    error::PauseError,
    event::PauseEvent,
    process::control::ProcessController,
    state::SessionPhase,
    tokio::{context::SessionContext, session::PauseSession},
};

impl<C: ProcessController> PauseSession<C> {
    /// Emits a non-terminal event while the process is still suspended.
    ///
    /// Waits for channel capacity, but gives up as soon as cancel arrives and
    /// hands the event back so it can be delivered after the resume.
    pub(crate) async fn emit_or_cancel(
        event_tx: &mpsc::Sender<PauseEvent>,
        event: PauseEvent,
        cancel_rx: &mut oneshot::Receiver<()>,
    ) -> Result<(), PauseEvent> {
        tokio::select! {
            biased;
            permit = event_tx.reserve() => {
                match permit {
                    Ok(permit) => permit.send(event),
                    Err(_) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(event = ?event, "Event channel closed");
                    }
                }
                Ok(())
            }
            // A dropped sender counts as a cancel
            _ = cancel_rx => Err(event),
        }
    }

    /// Emits the closing events of a session whose outcome is already final,
    /// then marks it settled.
    ///
    /// Events that fit are queued without waiting. On a full channel the
    /// session is marked settled first and the rest are sent as capacity
    /// frees up, so a canceller never waits on the consumer.
    pub(crate) async fn deliver_final(
        shared_context: &SessionContext,
        event_tx: &mpsc::Sender<PauseEvent>,
        events: Vec<PauseEvent>,
    ) {
        let mut events = events.into_iter();
        while let Some(event) = events.next() {
            match event_tx.try_send(event) {
                Ok(()) => {}
                Err(TrySendError::Full(event)) => {
                    shared_context.mark_settled();
                    for event in std::iter::once(event).chain(events) {
                        if let Err(_e) = event_tx.send(event).await {
                            #[cfg(feature = "tracing")]
                            tracing::warn!(event = ?_e.0, "Event channel closed");
                            break;
                        }
                    }
                    return;
                }
                Err(TrySendError::Closed(_event)) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(event = ?_event, "Event channel closed");
                    break;
                }
            }
        }
        shared_context.mark_settled();
    }

    /// Marks the session failed and emits the terminal `Error` event.
    pub(crate) async fn send_error_event_and_fail(
        shared_context: &SessionContext,
        error: PauseError,
        event_tx: &mpsc::Sender<PauseEvent>,
        pending: Option<PauseEvent>,
    ) {
        shared_context.set_phase(SessionPhase::Failed);
        shared_context.set_finished_at();
        let events = pending
            .into_iter()
            .chain(std::iter::once(PauseEvent::Error { error }))
            .collect();
        Self::deliver_final(shared_context, event_tx, events).await;
    }
}
