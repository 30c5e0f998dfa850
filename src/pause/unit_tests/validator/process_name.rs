use crate::pause::{error::PauseError, validator::RequestValidator};

#[test]
fn accept_executable_names() {
    assert!(RequestValidator::validate_process_name("notepad.exe").is_ok());
    assert!(RequestValidator::validate_process_name("GTA5.exe").is_ok());
    assert!(RequestValidator::validate_process_name("sleep").is_ok());
    assert!(RequestValidator::validate_process_name("my app").is_ok());
}

#[test]
fn reject_empty() {
    assert!(matches!(
        RequestValidator::validate_process_name(""),
        Err(PauseError::InvalidInput(_))
    ));
    assert!(RequestValidator::validate_process_name("   ").is_err());
}

#[test]
fn reject_surrounding_whitespace() {
    assert!(RequestValidator::validate_process_name(" notepad.exe").is_err());
    assert!(RequestValidator::validate_process_name("notepad.exe\n").is_err());
}

#[test]
fn reject_null_byte() {
    assert!(RequestValidator::validate_process_name("note\0pad.exe").is_err());
}

#[test]
fn reject_paths() {
    assert!(RequestValidator::validate_process_name("/usr/bin/sleep").is_err());
    assert!(RequestValidator::validate_process_name("C:\\Windows\\notepad.exe").is_err());
}

#[test]
fn reject_overlong_name() {
    let name = "a".repeat(256);
    assert!(RequestValidator::validate_process_name(&name).is_err());
    let name = "a".repeat(255);
    assert!(RequestValidator::validate_process_name(&name).is_ok());
}
