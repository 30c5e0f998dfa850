use tokio::sync::mpsc;

use crate::pause::{
    config::PauseRequest,
    error::PauseError,
    event::PauseEvent,
    state::SessionPhase,
    tokio::{
        integration_tests::helper::{
            FakeController, collect_until_terminal, expected_progress_sequence,
        },
        session::PauseSession,
    },
};

#[tokio::test]
async fn process_not_found() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(16);
    let mut session =
        PauseSession::new(PauseRequest::new("missing.exe", 5), controller.clone(), tx);

    let err = session.start().await.unwrap_err();
    assert_eq!(err, PauseError::NotFound("missing.exe".to_string()));

    match rx.try_recv() {
        Ok(PauseEvent::Error { error }) => assert_eq!(error, err),
        other => panic!("Expected Error, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());

    assert_eq!(session.phase(), SessionPhase::Failed);
    assert_eq!(session.process_id(), None);
    assert!(session.finished_at().is_some());
    assert_eq!(controller.resolves(), 1);
    assert_eq!(controller.suspends(), 0);
    assert_eq!(controller.resumes(), 0);
}

#[tokio::test]
async fn access_denied() {
    let controller = FakeController::new("csrss.exe")
        .suspend_error(PauseError::AccessDenied("csrss.exe".to_string()))
        .shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(16);
    let mut session =
        PauseSession::new(PauseRequest::new("csrss.exe", 5), controller.clone(), tx);

    let err = session.start().await.unwrap_err();
    assert!(matches!(err, PauseError::AccessDenied(_)));
    assert!(matches!(
        rx.try_recv(),
        Ok(PauseEvent::Error {
            error: PauseError::AccessDenied(_)
        })
    ));
    assert_eq!(session.phase(), SessionPhase::Failed);
    assert_eq!(controller.suspends(), 1);
    assert_eq!(controller.resumes(), 0);
}

#[tokio::test]
async fn invalid_name_touches_nothing() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(16);
    let mut session = PauseSession::new(PauseRequest::new("", 5), controller.clone(), tx);

    let err = session.start().await.unwrap_err();
    assert!(matches!(err, PauseError::InvalidInput(_)));
    assert!(matches!(rx.try_recv(), Ok(PauseEvent::Error { .. })));
    assert_eq!(controller.resolves(), 0);
    assert_eq!(controller.suspends(), 0);
}

#[tokio::test]
async fn invalid_duration_touches_nothing() {
    let controller = FakeController::new("notepad.exe").shared();
    for seconds in [0, 1000] {
        let (tx, _rx) = mpsc::channel::<PauseEvent>(16);
        let mut session = PauseSession::new(
            PauseRequest::new("notepad.exe", seconds),
            controller.clone(),
            tx,
        );
        assert!(matches!(
            session.start().await,
            Err(PauseError::InvalidInput(_))
        ));
    }
    assert_eq!(controller.resolves(), 0);
}

#[tokio::test(start_paused = true)]
async fn start_twice_is_rejected() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut session =
        PauseSession::new(PauseRequest::new("notepad.exe", 1), controller.clone(), tx);
    session.start().await.unwrap();

    assert!(matches!(
        session.start().await,
        Err(PauseError::InvalidInput(_))
    ));
    assert_eq!(controller.suspends(), 1);

    collect_until_terminal(&mut rx).await;
    session.join().await.unwrap();
    assert_eq!(controller.resumes(), 1);
}

#[tokio::test(start_paused = true)]
async fn resume_failure_is_reported() {
    let controller = FakeController::new("notepad.exe")
        .resume_error(PauseError::OperationFailed("resume".to_string()))
        .shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut session =
        PauseSession::new(PauseRequest::new("notepad.exe", 1), controller.clone(), tx);
    session.start().await.unwrap();

    let events = collect_until_terminal(&mut rx).await;
    assert_eq!(expected_progress_sequence(&events), 100);
    assert!(matches!(
        events.last(),
        Some(PauseEvent::Error {
            error: PauseError::OperationFailed(_)
        })
    ));

    // Reported, not retried
    session.join().await.unwrap();
    assert_eq!(session.phase(), SessionPhase::Failed);
    assert_eq!(controller.resumes(), 1);
    session.cancel().await.unwrap();
    assert_eq!(controller.resumes(), 1);
}
