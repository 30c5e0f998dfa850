use std::{ffi::OsStr, path::Path};

use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

/// Find the first live process whose executable name is `name`.
///
/// Takes a fresh snapshot of the process table and visits it in ascending
/// PID order, so "first" is reproducible. A process matches when its
/// reported name equals `name`, or when the file name of its executable or
/// of its `argv[0]` does; the latter covers Linux names longer than the 15
/// bytes the kernel keeps in `comm`. Names compare ASCII-case-insensitively
/// on Windows and exactly elsewhere. The calling process, its threads, and
/// zombies are skipped.
///
/// # Returns
///
/// - `Ok(Some(pid))` for the first match
/// - `Ok(None)` if nothing matches
/// - `Err(std::io::Error)` if the process table cannot be read
///
/// # Example
/// ```rust,no_run
/// use process_pauser::pause::process::action::find::find_process_id;
/// let pid = find_process_id("sleep").unwrap();
/// ```
pub fn find_process_id(name: &str) -> Result<Option<u32>, std::io::Error> {
    let mut system = System::new();
    let refresh_kind = ProcessRefreshKind::new()
        .with_exe(UpdateKind::OnlyIfNotSet)
        .with_cmd(UpdateKind::OnlyIfNotSet);
    system.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind);

    if system.processes().is_empty() {
        return Err(std::io::Error::other("Process table is empty or unreadable"));
    }

    let own_pid = Pid::from_u32(std::process::id());

    let mut candidates: Vec<(&Pid, &Process)> = system
        .processes()
        .iter()
        .filter(|(pid, process)| {
            **pid != own_pid && process.thread_kind().is_none() && !super::query::is_exited(process)
        })
        .collect();
    candidates.sort_unstable_by_key(|(pid, _)| **pid);

    Ok(candidates
        .into_iter()
        .find(|(_, process)| process_matches(process, name))
        .map(|(pid, _)| pid.as_u32()))
}

fn process_matches(process: &Process, name: &str) -> bool {
    if name_matches(process.name(), name) {
        return true;
    }
    if let Some(exe) = process.exe().and_then(Path::file_name)
        && name_matches(exe, name)
    {
        return true;
    }
    process
        .cmd()
        .first()
        .and_then(|argv0| Path::new(argv0).file_name())
        .is_some_and(|argv0| name_matches(argv0, name))
}

fn name_matches(candidate: &OsStr, name: &str) -> bool {
    let Some(candidate) = candidate.to_str() else {
        return false;
    };
    if cfg!(windows) {
        candidate.eq_ignore_ascii_case(name)
    } else {
        candidate == name
    }
}
