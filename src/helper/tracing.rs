use std::future::Future;

#[cfg(feature = "tracing")]
use tracing::{Instrument, Level};

/// Runs a session's background future inside a `pause_session` span carrying
/// the suspended pid, when the `tracing` feature is enabled; compiles to the
/// bare future otherwise.
pub(crate) trait MaybeInstrument: Future + Sized {
    #[cfg(feature = "tracing")]
    fn maybe_instrument(
        self,
        task: &'static str,
        process_id: u32,
    ) -> impl Future<Output = Self::Output> {
        let span = tracing::span!(Level::DEBUG, "pause_session", task, pid = process_id);
        self.instrument(span)
    }

    #[cfg(not(feature = "tracing"))]
    fn maybe_instrument(self, _task: &'static str, _process_id: u32) -> Self {
        self
    }
}

impl<F: Future> MaybeInstrument for F {}
