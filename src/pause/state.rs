/// Lifecycle phase of a pause session.
///
/// ```text
/// Idle -> Suspending -> Resuming -> Idle
///              |            \
///              |             -> Failed
///              -> Terminated
/// Idle -> Failed (resolve/suspend/validation error)
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SessionPhase {
    /// No process is held. Initial state, and the state after a successful resume.
    Idle = 0,
    /// The process was suspended and the tracking loop is running.
    Suspending = 1,
    /// An exit path claimed the resume and is performing it.
    Resuming = 2,
    /// The process exited while suspended.
    Terminated = 3,
    /// Validation, resolve, suspend or resume failed.
    Failed = 4,
}

impl SessionPhase {
    /// Whether a session in this phase still owes a resume.
    pub fn is_active(self) -> bool {
        matches!(self, SessionPhase::Suspending | SessionPhase::Resuming)
    }
}

impl From<u8> for SessionPhase {
    fn from(value: u8) -> Self {
        match value {
            1 => SessionPhase::Suspending,
            2 => SessionPhase::Resuming,
            3 => SessionPhase::Terminated,
            4 => SessionPhase::Failed,
            _ => SessionPhase::Idle,
        }
    }
}
