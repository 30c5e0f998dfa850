/// Resume a process by process ID (Unix).
///
/// Sends SIGCONT. A running process ignores it, and a process that no
/// longer exists is treated as already resumed, so calling this more than
/// once is harmless.
///
/// # Returns
///
/// - `Ok(())` if the process is running or gone
/// - `Err(std::io::Error)` with kind `PermissionDenied` if the caller may not
///   signal it, `Other` otherwise
///
/// # Example
/// ```rust,no_run
/// use process_pauser::pause::process::action::resume::resume_process;
/// let pid = 1234;
/// resume_process(pid).unwrap();
/// ```
#[cfg(unix)]
pub fn resume_process(pid: u32) -> Result<(), std::io::Error> {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, kill};

    use crate::pause::process::action::suspend::to_nix_pid;

    let nix_pid = to_nix_pid(pid)?;

    match kill(nix_pid, Signal::SIGCONT) {
        Ok(_) | Err(Errno::ESRCH) => Ok(()),
        Err(Errno::EPERM) => Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("Permission denied to resume PID {}", pid),
        )),
        Err(e) => Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to send SIGCONT to PID {}: {}", pid, e),
        )),
    }
}

/// Resume a process by process ID (Windows).
///
/// Calls `NtResumeProcess`. The suspend count never drops below zero, so
/// resuming a running process is a no-op; a PID that no longer exists is
/// treated as already resumed.
///
/// # Example
/// ```rust,no_run
/// use process_pauser::pause::process::action::resume::resume_process;
/// let pid = 1234;
/// resume_process(pid).unwrap();
/// ```
#[cfg(windows)]
pub fn resume_process(pid: u32) -> Result<(), std::io::Error> {
    use crate::pause::process::action::nt::{self, NtAction};
    use crate::pause::process::action::query::is_process_alive;

    match nt::run(pid, NtAction::Resume) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound || !is_process_alive(pid) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Process resuming is not available on this platform.
#[cfg(not(any(unix, windows)))]
pub fn resume_process(_pid: u32) -> Result<(), std::io::Error> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "Process resuming not supported on this platform",
    ))
}
