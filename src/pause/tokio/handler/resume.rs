use tokio::sync::mpsc;

use crate::pause::{
    event::{PauseEvent, ResumeReason},
    process::{control::ProcessController, handle::ProcessHandle},
    state::SessionPhase,
    tokio::{context::SessionContext, session::PauseSession},
};

impl<C: ProcessController> PauseSession<C> {
    /// Resumes the process if this exit path wins the `Suspending -> Resuming` claim.
    ///
    /// The resume is attempted exactly once and happens before any event is
    /// queued. `pending` is a `Started` that was still waiting for channel
    /// capacity when cancel arrived; it goes out ahead of the terminal event.
    /// A failure is reported as an `Error` event and otherwise not escalated:
    /// the process may already be gone, and nothing further can be done for it.
    pub(crate) async fn handle_resume(
        shared_context: &SessionContext,
        controller: &C,
        handle: &ProcessHandle,
        reason: ResumeReason,
        event_tx: &mpsc::Sender<PauseEvent>,
        pending: Option<PauseEvent>,
    ) {
        if !shared_context.transition(SessionPhase::Suspending, SessionPhase::Resuming) {
            #[cfg(feature = "tracing")]
            tracing::debug!(phase = ?shared_context.get_phase(), "Resume already claimed");
            shared_context.mark_settled();
            return;
        }

        match controller.resume(handle) {
            Ok(()) => {
                shared_context.set_phase(SessionPhase::Idle);
                let finished_at = shared_context.set_finished_at();
                #[cfg(feature = "tracing")]
                tracing::info!(pid = handle.process_id(), reason = ?reason, "Process resumed");
                let events = pending
                    .into_iter()
                    .chain(std::iter::once(PauseEvent::Completed {
                        reason,
                        finished_at,
                    }))
                    .collect();
                Self::deliver_final(shared_context, event_tx, events).await;
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(pid = handle.process_id(), error = %error, "Failed to resume process");
                Self::send_error_event_and_fail(shared_context, error, event_tx, pending).await;
            }
        }
    }

    /// Ends the session after the process exited while suspended. No resume is owed.
    pub(crate) async fn handle_process_died(
        shared_context: &SessionContext,
        handle: &ProcessHandle,
        event_tx: &mpsc::Sender<PauseEvent>,
        pending: Option<PauseEvent>,
    ) {
        if !shared_context.transition(SessionPhase::Suspending, SessionPhase::Terminated) {
            shared_context.mark_settled();
            return;
        }
        let finished_at = shared_context.set_finished_at();
        #[cfg(feature = "tracing")]
        tracing::warn!(pid = handle.process_id(), "Process terminated while suspended");
        let events = pending
            .into_iter()
            .chain(std::iter::once(PauseEvent::ProcessDied {
                process_id: handle.process_id(),
                finished_at,
            }))
            .collect();
        Self::deliver_final(shared_context, event_tx, events).await;
    }
}
