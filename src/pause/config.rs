use std::time::Duration;

use crate::pause::{error::PauseError, validator::RequestValidator};

/// Number of progress steps in every session, regardless of duration.
pub const TOTAL_TICKS: u32 = 100;

/// Milliseconds per tick for each requested second.
///
/// `TOTAL_TICKS * TICK_MS_PER_SECOND` is one second, so a session always
/// completes in `TOTAL_TICKS` visible steps spanning the requested duration.
pub const TICK_MS_PER_SECOND: u64 = 10;

/// A request to suspend one named process for a number of seconds
///
/// Requests are immutable once built. Use [`PauseRequest::from_input`] at the
/// presentation boundary, where duration text is clamped into `[1, 999]`, and
/// [`PauseRequest::new`] when the caller already holds a number.
///
/// # Examples
///
/// ```rust
/// use process_pauser::pause::config::PauseRequest;
///
/// let request = PauseRequest::from_input("notepad.exe", "5000");
/// assert_eq!(request.duration_seconds(), 999);
/// assert!(request.validate().is_ok());
///
/// let request = PauseRequest::new("notepad.exe", 0);
/// assert!(request.validate().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseRequest {
    process_name: String,
    duration_seconds: u32,
}

impl PauseRequest {
    pub fn new(process_name: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            process_name: process_name.into(),
            duration_seconds,
        }
    }

    /// Builds a request from raw input-field text.
    ///
    /// The duration is parsed leniently and clamped, never rejected; the name is
    /// kept as typed and checked later by [`validate`](Self::validate).
    pub fn from_input(process_name: impl Into<String>, duration_text: &str) -> Self {
        Self::new(
            process_name,
            RequestValidator::clamp_duration_text(duration_text),
        )
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Time between two progress ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_seconds) * TICK_MS_PER_SECOND)
    }

    /// Checks the request before any process is touched.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::InvalidInput`] if the name or the duration is invalid.
    pub fn validate(&self) -> Result<(), PauseError> {
        RequestValidator::validate_process_name(&self.process_name)?;
        RequestValidator::validate_duration(self.duration_seconds)?;
        Ok(())
    }
}
