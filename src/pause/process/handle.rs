/// Opaque reference to a live OS process obtained by name resolution.
///
/// A handle is owned by the session that resolved it and is not `Clone`;
/// it becomes meaningless once the process exits or the session ends.
/// The OS-level access handles needed for suspend/resume are opened per
/// operation and closed immediately, so dropping a `ProcessHandle` never
/// leaks native resources.
#[derive(Debug, PartialEq, Eq)]
pub struct ProcessHandle {
    process_id: u32,
    process_name: String,
}

impl ProcessHandle {
    /// Wraps an already-resolved process.
    ///
    /// Intended for [`ProcessController`](crate::pause::process::control::ProcessController)
    /// implementations; sessions obtain handles through `resolve`.
    pub fn new(process_id: u32, process_name: impl Into<String>) -> Self {
        Self {
            process_id,
            process_name: process_name.into(),
        }
    }

    pub fn process_id(&self) -> u32 {
        self.process_id
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}
