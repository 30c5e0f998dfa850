use crate::pause::{error::PauseError, validator::RequestValidator};

#[test]
fn reject_0_duration() {
    assert!(matches!(
        RequestValidator::validate_duration(0),
        Err(PauseError::InvalidInput(_))
    ));
}

#[test]
fn reject_duration_above_999() {
    assert!(RequestValidator::validate_duration(1000).is_err());
    assert!(RequestValidator::validate_duration(u32::MAX).is_err());
}

#[test]
fn accept_bounds() {
    assert!(RequestValidator::validate_duration(1).is_ok());
    assert!(RequestValidator::validate_duration(999).is_ok());
}
