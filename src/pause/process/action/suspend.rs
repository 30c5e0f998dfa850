/// Convert a PID into the signed form `nix` expects.
#[cfg(unix)]
pub(crate) fn to_nix_pid(pid: u32) -> Result<nix::unistd::Pid, std::io::Error> {
    // PID 0 would address our own process group
    if pid == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Invalid PID: 0",
        ));
    }
    let pid_i32 = i32::try_from(pid).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("PID {} is too large for this system", pid),
        )
    })?;
    Ok(nix::unistd::Pid::from_raw(pid_i32))
}

/// Suspend a process by process ID (Unix).
///
/// Sends SIGSTOP, which stops every thread of the target until SIGCONT.
///
/// # Returns
///
/// - `Ok(())` if the signal was delivered
/// - `Err(std::io::Error)` with kind `NotFound` if the process does not exist,
///   `PermissionDenied` if the caller may not signal it, `Other` otherwise
///
/// # Example
/// ```rust,no_run
/// use process_pauser::pause::process::action::suspend::suspend_process;
/// let pid = 1234;
/// suspend_process(pid).unwrap();
/// ```
#[cfg(unix)]
pub fn suspend_process(pid: u32) -> Result<(), std::io::Error> {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, kill};

    let nix_pid = to_nix_pid(pid)?;

    match kill(nix_pid, Signal::SIGSTOP) {
        Ok(_) => Ok(()),
        Err(Errno::ESRCH) => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Process with PID {} does not exist", pid),
        )),
        Err(Errno::EPERM) => Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("Permission denied to suspend PID {}", pid),
        )),
        Err(e) => Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to send SIGSTOP to PID {}: {}", pid, e),
        )),
    }
}

/// Suspend a process by process ID (Windows).
///
/// Requests `PROCESS_SUSPEND_RESUME` access and calls `NtSuspendProcess`,
/// which stops all threads of the process at once.
///
/// # Returns
///
/// - `Ok(())` if the process was suspended
/// - `Err(std::io::Error)` with kind `PermissionDenied` if access is refused,
///   `NotFound` if the PID is gone, `Other` if the native call fails
///
/// # Example
/// ```rust,no_run
/// use process_pauser::pause::process::action::suspend::suspend_process;
/// let pid = 1234;
/// suspend_process(pid).unwrap();
/// ```
#[cfg(windows)]
pub fn suspend_process(pid: u32) -> Result<(), std::io::Error> {
    use crate::pause::process::action::nt::{self, NtAction};

    nt::run(pid, NtAction::Suspend)
}

/// Process suspension is not available on this platform.
#[cfg(not(any(unix, windows)))]
pub fn suspend_process(_pid: u32) -> Result<(), std::io::Error> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "Process suspension not supported on this platform",
    ))
}
