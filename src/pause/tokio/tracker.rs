use std::{sync::Arc, time::SystemTime};

use tokio::sync::{mpsc, oneshot};

use crate::pause::{
    event::{PauseEvent, ResumeReason},
    process::{control::ProcessController, handle::ProcessHandle},
    tokio::{context::SessionContext, session::PauseSession},
};

impl<C: ProcessController> PauseSession<C> {
    /// Background tracking loop for one suspended process.
    ///
    /// Emits `Started`, then each tick waits one interval, emits
    /// `Progress(tick)` and polls liveness. Both the wait and any wait for
    /// channel capacity race the cancel receiver, so a cancel is acted on
    /// even while the consumer is not reading. A cancel that lands as the
    /// wait completes is seen before the next `Progress` is emitted, and a
    /// `Progress` still waiting for capacity when cancel lands is dropped.
    /// A held `Started` is delivered ahead of the terminal event.
    ///
    /// Exits through exactly one of:
    /// - process died: `ProcessDied`, no resume
    /// - cancelled or all ticks elapsed: [`handle_resume`](Self::handle_resume)
    pub(crate) async fn track(
        shared_context: Arc<SessionContext>,
        controller: Arc<C>,
        handle: ProcessHandle,
        event_tx: mpsc::Sender<PauseEvent>,
        mut cancel_rx: oneshot::Receiver<()>,
        started_at: SystemTime,
    ) {
        let interval = shared_context.request.tick_interval();
        let total_ticks = shared_context.get_total_ticks();
        let mut reason = ResumeReason::Elapsed;
        let mut pending = None;

        let started = PauseEvent::Started {
            process_id: handle.process_id(),
            process_name: handle.process_name().to_string(),
            total_ticks,
            started_at,
        };
        if let Err(event) = Self::emit_or_cancel(&event_tx, started, &mut cancel_rx).await {
            reason = ResumeReason::Cancelled;
            pending = Some(event);
        }

        let mut tick = 0;
        while reason == ResumeReason::Elapsed && tick < total_ticks {
            // A dropped sender counts as a cancel
            let cancelled = tokio::select! {
                biased;
                _ = &mut cancel_rx => true,
                _ = tokio::time::sleep(interval) => Self::cancel_pending(&mut cancel_rx),
            };
            if cancelled {
                #[cfg(feature = "tracing")]
                tracing::debug!(tick, "Cancel observed");
                reason = ResumeReason::Cancelled;
                break;
            }

            let progress = PauseEvent::Progress { tick };
            if Self::emit_or_cancel(&event_tx, progress, &mut cancel_rx)
                .await
                .is_err()
            {
                // The tick was never queued, so the terminal event comes next
                #[cfg(feature = "tracing")]
                tracing::debug!(tick, "Cancel observed while the event channel was full");
                reason = ResumeReason::Cancelled;
                break;
            }
            shared_context.set_elapsed_ticks(tick + 1);

            if !controller.is_alive(&handle) {
                Self::handle_process_died(&shared_context, &handle, &event_tx, None).await;
                return;
            }
            tick += 1;
        }

        if reason == ResumeReason::Cancelled && !controller.is_alive(&handle) {
            Self::handle_process_died(&shared_context, &handle, &event_tx, pending).await;
            return;
        }

        Self::handle_resume(
            &shared_context,
            controller.as_ref(),
            &handle,
            reason,
            &event_tx,
            pending,
        )
        .await;
    }

    fn cancel_pending(cancel_rx: &mut oneshot::Receiver<()>) -> bool {
        !matches!(
            cancel_rx.try_recv(),
            Err(oneshot::error::TryRecvError::Empty)
        )
    }
}
