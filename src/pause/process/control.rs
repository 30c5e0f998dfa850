use crate::pause::{
    error::PauseError,
    process::{
        action::{
            find::find_process_id, query::is_process_alive, resume::resume_process,
            suspend::suspend_process,
        },
        handle::ProcessHandle,
    },
};

/// The OS process-control surface a pause session needs.
///
/// These four operations are the only ones that touch real processes, so a
/// session can be driven entirely by a fake implementation in tests.
pub trait ProcessController: Send + Sync + 'static {
    /// Resolves an executable name to the first matching live process.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::NotFound`] if no process matches.
    fn resolve(&self, name: &str) -> Result<ProcessHandle, PauseError>;

    /// Stops every thread of the process.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::AccessDenied`] if access is refused, or
    /// [`PauseError::OperationFailed`] if the native call fails.
    fn suspend(&self, handle: &ProcessHandle) -> Result<(), PauseError>;

    /// Restarts a suspended process.
    ///
    /// Resuming a running or exited process must succeed without effect.
    /// Callers still track whether a resume is owed; the session resumes at
    /// most once.
    fn resume(&self, handle: &ProcessHandle) -> Result<(), PauseError>;

    /// Reports whether the process still exists, without waiting on it or
    /// changing its run state.
    fn is_alive(&self, handle: &ProcessHandle) -> bool;
}

/// [`ProcessController`] backed by the native process table.
///
/// - Lookup: `sysinfo` process table on every platform
/// - Unix: `SIGSTOP`/`SIGCONT`
/// - Windows: `NtSuspendProcess`/`NtResumeProcess`
///
/// When several processes share a name, the lowest PID wins. Use a more specific
/// executable name to target another instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeController;

impl NativeController {
    pub fn new() -> Self {
        Self
    }
}

fn map_io_error(action: &str, pid: u32, err: std::io::Error) -> PauseError {
    let msg = format!("Failed to {} process {}: {}", action, pid, err);
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, pid, "{}", msg);
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => PauseError::AccessDenied(msg),
        std::io::ErrorKind::NotFound => PauseError::NotFound(msg),
        _ => PauseError::OperationFailed(msg),
    }
}

impl ProcessController for NativeController {
    fn resolve(&self, name: &str) -> Result<ProcessHandle, PauseError> {
        match find_process_id(name) {
            Ok(Some(pid)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(pid, name, "Resolved process");
                Ok(ProcessHandle::new(pid, name))
            }
            Ok(None) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(name, "No process matches name");
                Err(PauseError::NotFound(name.to_string()))
            }
            Err(e) => {
                let msg = format!("Failed to enumerate processes: {}", e);
                #[cfg(feature = "tracing")]
                tracing::error!(error = %e, "{}", msg);
                Err(PauseError::OperationFailed(msg))
            }
        }
    }

    fn suspend(&self, handle: &ProcessHandle) -> Result<(), PauseError> {
        let pid = handle.process_id();
        suspend_process(pid).map_err(|e| map_io_error("suspend", pid, e))
    }

    fn resume(&self, handle: &ProcessHandle) -> Result<(), PauseError> {
        let pid = handle.process_id();
        resume_process(pid).map_err(|e| map_io_error("resume", pid, e))
    }

    fn is_alive(&self, handle: &ProcessHandle) -> bool {
        is_process_alive(handle.process_id())
    }
}
