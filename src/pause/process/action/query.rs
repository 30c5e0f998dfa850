use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System};

/// Read the scheduler status of a single process.
///
/// Returns `None` when the process does not exist.
pub fn process_status(pid: u32) -> Option<ProcessStatus> {
    let pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::new(),
    );
    system.process(pid).map(Process::status)
}

/// Zombies have exited and only wait to be reaped.
pub(crate) fn is_exited(process: &Process) -> bool {
    matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead)
}

/// Check whether a process is still alive without affecting its run state (Unix).
///
/// A stopped process is alive; a zombie is not.
#[cfg(unix)]
pub fn is_process_alive(pid: u32) -> bool {
    !matches!(
        process_status(pid),
        None | Some(ProcessStatus::Zombie) | Some(ProcessStatus::Dead)
    )
}

/// Check whether a process is still alive without affecting its run state (Windows).
///
/// Queries the exit code. Only a PID that no longer names any process counts
/// as dead; a process that cannot be opened or queried for any other reason
/// is treated as alive so the resume stays owed.
#[cfg(windows)]
pub fn is_process_alive(pid: u32) -> bool {
    use windows::Win32::Foundation::CloseHandle;
    use windows::Win32::System::Threading::{
        GetExitCodeProcess, OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
    };

    // STILL_ACTIVE
    const STILL_ACTIVE_EXIT_CODE: u32 = 259;

    unsafe {
        let handle = match OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) {
            Ok(handle) => handle,
            Err(e) => return !open_failure_means_exited(e.code()),
        };
        let mut exit_code = 0u32;
        let alive = match GetExitCodeProcess(handle, &mut exit_code) {
            Ok(()) => exit_code == STILL_ACTIVE_EXIT_CODE,
            Err(_) => true,
        };
        let _ = CloseHandle(handle);
        alive
    }
}

/// `OpenProcess` reports a PID that names no process as an invalid parameter.
/// Access denied and every other failure say nothing about liveness.
#[cfg(windows)]
pub(crate) fn open_failure_means_exited(code: windows::core::HRESULT) -> bool {
    code == windows::Win32::Foundation::ERROR_INVALID_PARAMETER.to_hresult()
}

/// Liveness queries are not available on this platform.
#[cfg(not(any(unix, windows)))]
pub fn is_process_alive(_pid: u32) -> bool {
    false
}
