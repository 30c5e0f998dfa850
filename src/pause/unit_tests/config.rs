use std::time::Duration;

use crate::pause::{
    config::{PauseRequest, TICK_MS_PER_SECOND, TOTAL_TICKS},
    error::PauseError,
};

#[test]
fn from_input_clamps_duration() {
    let request = PauseRequest::from_input("notepad.exe", "0");
    assert_eq!(request.duration_seconds(), 1);
    assert!(request.validate().is_ok());

    let request = PauseRequest::from_input("notepad.exe", "5000");
    assert_eq!(request.duration_seconds(), 999);
    assert!(request.validate().is_ok());
}

#[test]
fn from_input_keeps_name() {
    let request = PauseRequest::from_input("GTA5.exe", "10");
    assert_eq!(request.process_name(), "GTA5.exe");
    assert_eq!(request.duration_seconds(), 10);
}

#[test]
fn new_does_not_clamp() {
    let request = PauseRequest::new("notepad.exe", 0);
    assert_eq!(request.duration_seconds(), 0);
    assert!(matches!(
        request.validate(),
        Err(PauseError::InvalidInput(_))
    ));
}

#[test]
fn validation() {
    assert!(PauseRequest::new("notepad.exe", 5).validate().is_ok());
    assert!(PauseRequest::new("", 5).validate().is_err());
    assert!(PauseRequest::from_input("", "5").validate().is_err());
    assert!(PauseRequest::new("notepad.exe", 1000).validate().is_err());
}

#[test]
fn tick_interval_scales_with_duration() {
    let request = PauseRequest::new("notepad.exe", 5);
    assert_eq!(request.tick_interval(), Duration::from_millis(50));

    // Ticks always add up to the requested duration
    for seconds in [1u32, 7, 999] {
        let request = PauseRequest::new("notepad.exe", seconds);
        assert_eq!(
            request.tick_interval() * TOTAL_TICKS,
            Duration::from_secs(u64::from(seconds))
        );
    }
    assert_eq!(TICK_MS_PER_SECOND * u64::from(TOTAL_TICKS), 1000);
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_from_json() {
    let request: PauseRequest =
        serde_json::from_str(r#"{"process_name":"notepad.exe","duration_seconds":30}"#).unwrap();
    assert_eq!(request, PauseRequest::new("notepad.exe", 30));
    assert!(request.validate().is_ok());

    let json = serde_json::to_string(&PauseRequest::new("sleep", 2)).unwrap();
    assert!(json.contains("\"process_name\":\"sleep\""));
}
