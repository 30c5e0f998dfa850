use std::{
    sync::atomic::{AtomicBool, AtomicU8, AtomicU32, AtomicU64, Ordering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use tokio::sync::Notify;

use crate::pause::{config::PauseRequest, state::SessionPhase};

/// Session state shared between the foreground session handle and the
/// background tracking task.
///
/// `phase` is the single authority on who owes the resume: exit paths claim
/// it with [`transition`](Self::transition) and only the winner acts.
///
/// `settled` flips once the outcome is final and the process is no longer
/// held. It never waits on the event consumer, so a caller that reads events
/// on the same task can wait for it.
#[derive(Debug)]
pub(crate) struct SessionContext {
    pub(crate) request: PauseRequest,
    phase: AtomicU8,
    process_id: AtomicU32,
    elapsed_ticks: AtomicU32,
    total_ticks: AtomicU32,
    started_at: AtomicU64,
    finished_at: AtomicU64,
    settled: AtomicBool,
    settled_notify: Notify,
}

impl SessionContext {
    pub(crate) fn new(request: PauseRequest) -> Self {
        Self {
            request,
            phase: AtomicU8::new(SessionPhase::Idle as u8),
            process_id: AtomicU32::new(0),
            elapsed_ticks: AtomicU32::new(0),
            total_ticks: AtomicU32::new(0),
            started_at: AtomicU64::new(0),
            finished_at: AtomicU64::new(0),
            settled: AtomicBool::new(false),
            settled_notify: Notify::new(),
        }
    }

    pub(crate) fn get_phase(&self) -> SessionPhase {
        self.phase.load(Ordering::SeqCst).into()
    }
    pub(crate) fn set_phase(&self, phase: SessionPhase) {
        self.phase.store(phase as u8, Ordering::SeqCst);
    }

    /// Atomically moves `from -> to`. Returns `false` if the phase was not `from`.
    pub(crate) fn transition(&self, from: SessionPhase, to: SessionPhase) -> bool {
        self.phase
            .compare_exchange(from as u8, to as u8, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.settled.load(Ordering::SeqCst)
    }
    pub(crate) fn mark_settled(&self) {
        self.settled.store(true, Ordering::SeqCst);
        self.settled_notify.notify_waiters();
    }

    /// Resolves once [`mark_settled`](Self::mark_settled) has been called.
    pub(crate) async fn settled(&self) {
        loop {
            // Registered before the check so a concurrent notify is not missed
            let notified = self.settled_notify.notified();
            if self.is_settled() {
                return;
            }
            notified.await;
        }
    }

    pub(crate) fn get_process_id(&self) -> Option<u32> {
        match self.process_id.load(Ordering::SeqCst) {
            0 => None,
            pid => Some(pid),
        }
    }
    pub(crate) fn set_process_id(&self, pid: u32) {
        self.process_id.store(pid, Ordering::SeqCst);
    }

    pub(crate) fn get_elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks.load(Ordering::SeqCst)
    }
    pub(crate) fn set_elapsed_ticks(&self, ticks: u32) {
        self.elapsed_ticks.store(ticks, Ordering::SeqCst);
    }

    pub(crate) fn get_total_ticks(&self) -> u32 {
        self.total_ticks.load(Ordering::SeqCst)
    }
    pub(crate) fn set_total_ticks(&self, ticks: u32) {
        self.total_ticks.store(ticks, Ordering::SeqCst);
    }

    pub(crate) fn get_started_at(&self) -> Option<SystemTime> {
        Self::get_time(&self.started_at)
    }
    pub(crate) fn set_started_at(&self) -> SystemTime {
        Self::set_time(&self.started_at)
    }

    pub(crate) fn get_finished_at(&self) -> Option<SystemTime> {
        Self::get_time(&self.finished_at)
    }
    pub(crate) fn set_finished_at(&self) -> SystemTime {
        Self::set_time(&self.finished_at)
    }

    fn get_time(store: &AtomicU64) -> Option<SystemTime> {
        match store.load(Ordering::SeqCst) {
            0 => None,
            nanos => Some(UNIX_EPOCH + Duration::from_nanos(nanos)),
        }
    }
    fn set_time(store: &AtomicU64) -> SystemTime {
        let now = SystemTime::now();
        let nanos = now
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        store.store(nanos, Ordering::SeqCst);
        now
    }
}
