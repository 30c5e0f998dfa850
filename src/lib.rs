//! # process-pauser
//!
//! Suspend a running process by name for a bounded duration, then resume it
//! automatically, with progress events and early cancellation.
//!
//! ## Features
//!
//! - **Name Resolution**: Find a live process by executable name in the native process table
//! - **Suspend/Resume**: `SIGSTOP`/`SIGCONT` on Unix, `NtSuspendProcess`/`NtResumeProcess` on Windows
//! - **Progress Events**: 100 evenly spaced ticks per session, whatever the duration
//! - **Death Detection**: A process that exits while suspended ends the session without a resume
//! - **Cancellation**: Resume early at any time; exactly one resume reaches the process
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use process_pauser::pause::{event::PauseEvent, tokio::pauser::Pauser};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (tx, mut rx) = mpsc::channel(128);
//!     let mut pauser = Pauser::native(tx);
//!
//!     // Pause for 5 seconds: 100 ticks, 50ms apart
//!     pauser.start_pause("notepad.exe", "5").await?;
//!
//!     while let Some(event) = rx.recv().await {
//!         match event {
//!             PauseEvent::Progress { tick } => println!("{}%", tick + 1),
//!             PauseEvent::Completed { .. } => break,
//!             PauseEvent::ProcessDied { .. } => {
//!                 println!("The process has been terminated.");
//!                 break;
//!             }
//!             PauseEvent::Error { error } => {
//!                 eprintln!("Error: {}", error);
//!                 break;
//!             }
//!             PauseEvent::Started { .. } => {}
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Controllers
//!
//! Sessions only talk to processes through
//! [`ProcessController`](pause::process::control::ProcessController). Implement it
//! to drive sessions against something other than the native process table.
//!
//! ## Limitations
//!
//! - When several processes share a name, the one with the lowest PID is paused
//! - Resume is best-effort: a failed resume is reported, not retried
//!
//! ## Optional Features
//!
//! - `serde`: Enable serialization support for requests, events and errors
//! - `tracing`: Enable structured logging integration

pub(crate) mod helper;
pub mod pause;
