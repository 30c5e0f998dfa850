use windows::Win32::Foundation::{CloseHandle, ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER, HANDLE};
use windows::Win32::System::LibraryLoader::{GetModuleHandleA, GetProcAddress};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_SUSPEND_RESUME};
use windows::core::{PCSTR, s};

type NtProcessFn = unsafe extern "system" fn(HANDLE) -> i32;

/// Which `ntdll` process-wide primitive to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NtAction {
    Suspend,
    Resume,
}

impl NtAction {
    fn symbol(self) -> PCSTR {
        match self {
            NtAction::Suspend => s!("NtSuspendProcess"),
            NtAction::Resume => s!("NtResumeProcess"),
        }
    }

    fn verb(self) -> &'static str {
        match self {
            NtAction::Suspend => "suspend",
            NtAction::Resume => "resume",
        }
    }
}

/// Open `pid` with `PROCESS_SUSPEND_RESUME` and run `NtSuspendProcess` or
/// `NtResumeProcess` on it. The access handle is closed before returning.
///
/// Errors map onto `std::io::ErrorKind`:
/// - `PermissionDenied` when the access request is refused
/// - `NotFound` when the PID no longer names a process
/// - `Other` when the primitive is missing or returns a failure status
pub(crate) fn run(pid: u32, action: NtAction) -> Result<(), std::io::Error> {
    unsafe {
        let handle = OpenProcess(PROCESS_SUSPEND_RESUME, false, pid).map_err(|e| {
            let kind = if e.code() == ERROR_ACCESS_DENIED.to_hresult() {
                std::io::ErrorKind::PermissionDenied
            } else if e.code() == ERROR_INVALID_PARAMETER.to_hresult() {
                std::io::ErrorKind::NotFound
            } else {
                std::io::ErrorKind::Other
            };
            std::io::Error::new(
                kind,
                format!("Failed to open process with PID {}: {:?}", pid, e),
            )
        })?;

        let result = invoke(handle, action, pid);
        let _ = CloseHandle(handle);
        result
    }
}

unsafe fn invoke(handle: HANDLE, action: NtAction, pid: u32) -> Result<(), std::io::Error> {
    let failed = |detail: String| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to {} process with PID {}: {}", action.verb(), pid, detail),
        )
    };

    unsafe {
        let ntdll = GetModuleHandleA(s!("ntdll.dll")).map_err(|e| failed(format!("{:?}", e)))?;
        let Some(proc_addr) = GetProcAddress(ntdll, action.symbol()) else {
            return Err(failed("ntdll export missing".to_string()));
        };
        let nt_fn: NtProcessFn = std::mem::transmute(proc_addr);

        let status = nt_fn(handle);
        if status != 0 {
            return Err(failed(format!("NTSTATUS {:#010x}", status)));
        }
    }
    Ok(())
}
