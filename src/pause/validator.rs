use crate::pause::error::PauseError;

pub const MIN_DURATION_SECONDS: u32 = 1;
pub const MAX_DURATION_SECONDS: u32 = 999;
const MAX_PROCESS_NAME_LEN: usize = 255;

/// Validation rules for pause requests
pub struct RequestValidator;

impl RequestValidator {
    /// Validates a process name.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::InvalidInput`] if:
    /// - Name is empty or contains only whitespace
    /// - Name has leading or trailing whitespace
    /// - Name contains a null byte or a path separator
    /// - Name length exceeds the maximum allowed length
    ///
    /// # Examples
    /// ```rust
    /// use process_pauser::pause::validator::RequestValidator;
    ///
    /// assert!(RequestValidator::validate_process_name("notepad.exe").is_ok());
    /// assert!(RequestValidator::validate_process_name("").is_err());
    /// assert!(RequestValidator::validate_process_name("../bin/sh").is_err());
    /// ```
    pub fn validate_process_name(name: &str) -> Result<(), PauseError> {
        if name.trim().is_empty() {
            return Err(PauseError::InvalidInput(
                "Process name cannot be empty".to_string(),
            ));
        }
        if name.trim() != name {
            return Err(PauseError::InvalidInput(
                "Process name cannot have leading or trailing whitespace".to_string(),
            ));
        }
        if name.contains('\0') {
            return Err(PauseError::InvalidInput(
                "Process name cannot contain null bytes".to_string(),
            ));
        }
        // Matching is against bare executable names, never paths
        if name.contains('/') || name.contains('\\') {
            return Err(PauseError::InvalidInput(format!(
                "Process name '{}' must not contain path separators",
                name
            )));
        }
        if name.len() > MAX_PROCESS_NAME_LEN {
            return Err(PauseError::InvalidInput(
                "Process name length exceeds maximum allowed length".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates a pause duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`PauseError::InvalidInput`] if the duration is outside `[1, 999]`.
    pub fn validate_duration(seconds: u32) -> Result<(), PauseError> {
        if !(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&seconds) {
            return Err(PauseError::InvalidInput(format!(
                "Duration {}s is outside the accepted range [{}, {}]",
                seconds, MIN_DURATION_SECONDS, MAX_DURATION_SECONDS
            )));
        }
        Ok(())
    }

    /// Parses duration text the way the input field always has: leading
    /// whitespace and an optional sign, then as many digits as are present.
    /// Anything else yields 0. The result is clamped into `[1, 999]`.
    ///
    /// # Examples
    /// ```rust
    /// use process_pauser::pause::validator::RequestValidator;
    ///
    /// assert_eq!(RequestValidator::clamp_duration_text("10"), 10);
    /// assert_eq!(RequestValidator::clamp_duration_text("0"), 1);
    /// assert_eq!(RequestValidator::clamp_duration_text("5000"), 999);
    /// assert_eq!(RequestValidator::clamp_duration_text("12s"), 12);
    /// ```
    pub fn clamp_duration_text(text: &str) -> u32 {
        let trimmed = text.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut value: u32 = 0;
        for b in digits.bytes().take_while(u8::is_ascii_digit) {
            value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
        }
        if negative {
            value = 0;
        }

        value.clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
    }
}
