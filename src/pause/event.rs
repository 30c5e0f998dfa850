use std::time::SystemTime;

use crate::pause::error::PauseError;

/// Events emitted over the lifetime of a pause session
///
/// `PauseEvent` is the whole output surface towards the presentation layer.
///
/// # Event Flow
///
/// A session that runs to completion emits, in order:
/// 1. `Started` - the process was resolved and suspended
/// 2. `Progress` - one per tick, `tick` going 0, 1, ... with no gaps
/// 3. exactly one terminal event: `Completed`, `ProcessDied` or `Error`
///
/// A session that fails before suspending emits only `Error`.
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
///     pauser.start_pause("notepad.exe", "5").await?;
///
///     while let Some(event) = rx.recv().await {
///         match event {
///             PauseEvent::Progress { tick } => println!("tick {}", tick),
///             PauseEvent::Completed { reason, .. } => {
///                 println!("resumed: {:?}", reason);
///                 break;
///             }
///             PauseEvent::ProcessDied { .. } => {
///                 println!("The process has been terminated.");
///                 break;
///             }
///             PauseEvent::Error { error } => {
///                 eprintln!("Error: {}", error);
///                 break;
///             }
///             PauseEvent::Started { .. } => {}
///         }
///     }
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum PauseEvent {
    /// The process was resolved and is now suspended.
    Started {
        process_id: u32,
        process_name: String,
        total_ticks: u32,
        started_at: SystemTime,
    },

    /// One tick of the tracking loop elapsed while the process stayed suspended.
    Progress {
        /// Zero-based tick index, strictly increasing within a session
        tick: u32,
    },

    /// The process was resumed.
    Completed {
        reason: ResumeReason,
        finished_at: SystemTime,
    },

    /// The process exited while suspended. No resume was attempted.
    ProcessDied {
        process_id: u32,
        finished_at: SystemTime,
    },

    /// The session ended with an error.
    Error { error: PauseError },
}

impl PauseEvent {
    /// Whether this event ends its session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PauseEvent::Completed { .. } | PauseEvent::ProcessDied { .. } | PauseEvent::Error { .. }
        )
    }
}

/// Why a suspended process was resumed
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeReason {
    /// All ticks elapsed.
    Elapsed,

    /// The presentation layer requested an early resume, or the session was dropped.
    Cancelled,
}
