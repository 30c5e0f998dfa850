use std::time::Duration;

use tokio::{sync::mpsc, time::timeout};

use crate::pause::{
    error::PauseError,
    event::{PauseEvent, ResumeReason},
    state::SessionPhase,
    tokio::{
        integration_tests::helper::{FakeController, collect_until_terminal, wait_for_tick},
        pauser::Pauser,
    },
};

#[tokio::test(start_paused = true)]
async fn duration_text_is_clamped() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut pauser = Pauser::new(controller.clone(), tx);

    pauser.start_pause("notepad.exe", "0").await.unwrap();
    let session = pauser.session().unwrap();
    assert_eq!(session.request().duration_seconds(), 1);
    pauser.cancel_pause().await.unwrap();
    collect_until_terminal(&mut rx).await;

    pauser.start_pause("notepad.exe", "5000").await.unwrap();
    assert_eq!(pauser.session().unwrap().request().duration_seconds(), 999);
    pauser.cancel_pause().await.unwrap();
    collect_until_terminal(&mut rx).await;

    assert_eq!(controller.suspends(), 2);
    assert_eq!(controller.resumes(), 2);
}

#[tokio::test(start_paused = true)]
async fn one_session_at_a_time() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut pauser = Pauser::new(controller.clone(), tx);

    pauser.start_pause("notepad.exe", "10").await.unwrap();
    assert!(pauser.is_active());
    wait_for_tick(&mut rx, 0).await;

    let err = pauser.start_pause("notepad.exe", "10").await.unwrap_err();
    assert_eq!(err, PauseError::SessionActive);
    assert_eq!(controller.resolves(), 1);
    assert_eq!(controller.suspends(), 1);

    pauser.cancel_pause().await.unwrap();
    // No Error event for the rejected request
    match rx.try_recv() {
        Ok(PauseEvent::Completed { reason, .. }) => assert_eq!(reason, ResumeReason::Cancelled),
        other => panic!("Expected Completed, got {:?}", other),
    }
    assert!(!pauser.is_active());
}

#[tokio::test]
async fn cancel_when_idle_is_noop() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(16);
    let mut pauser = Pauser::new(controller.clone(), tx);

    pauser.cancel_pause().await.unwrap();
    assert!(pauser.session().is_none());
    assert_eq!(controller.resumes(), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn new_session_after_failure() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut pauser = Pauser::new(controller.clone(), tx);

    let err = pauser.start_pause("notepad", "5").await.unwrap_err();
    assert!(matches!(err, PauseError::NotFound(_)));
    assert!(!pauser.is_active());
    assert_eq!(pauser.session().unwrap().phase(), SessionPhase::Failed);
    assert!(matches!(rx.try_recv(), Ok(PauseEvent::Error { .. })));

    pauser.start_pause("notepad.exe", "1").await.unwrap();
    let events = collect_until_terminal(&mut rx).await;
    assert!(matches!(events.first(), Some(PauseEvent::Started { .. })));
    assert!(matches!(
        events.last(),
        Some(PauseEvent::Completed {
            reason: ResumeReason::Elapsed,
            ..
        })
    ));
    assert_eq!(controller.resumes(), 1);
}

#[tokio::test(start_paused = true)]
async fn new_session_after_completion() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut pauser = Pauser::new(controller.clone(), tx);

    pauser.start_pause("notepad.exe", "1").await.unwrap();
    collect_until_terminal(&mut rx).await;
    pauser.start_pause("notepad.exe", "1").await.unwrap();
    collect_until_terminal(&mut rx).await;

    assert_eq!(controller.suspends(), 2);
    assert_eq!(controller.resumes(), 2);
}

#[tokio::test(start_paused = true)]
async fn shutdown_resumes_and_joins() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(256);
    let mut pauser = Pauser::new(controller.clone(), tx);

    pauser.start_pause("notepad.exe", "60").await.unwrap();
    wait_for_tick(&mut rx, 3).await;
    pauser.shutdown().await.unwrap();

    assert!(pauser.session().is_none());
    assert!(!controller.is_suspended());
    assert_eq!(controller.resumes(), 1);
    assert!(matches!(
        rx.try_recv(),
        Ok(PauseEvent::Completed {
            reason: ResumeReason::Cancelled,
            ..
        })
    ));
}

#[tokio::test(start_paused = true)]
async fn cancel_pause_from_reading_task() {
    let controller = FakeController::new("notepad.exe").shared();
    let (tx, mut rx) = mpsc::channel::<PauseEvent>(4);
    let mut pauser = Pauser::new(controller.clone(), tx);

    pauser.start_pause("notepad.exe", "1").await.unwrap();
    assert!(matches!(rx.recv().await, Some(PauseEvent::Started { .. })));
    tokio::time::sleep(Duration::from_millis(100)).await;

    timeout(Duration::from_secs(3600), pauser.cancel_pause())
        .await
        .expect("cancel_pause waited for the event consumer")
        .unwrap();
    assert!(!pauser.is_active());
    assert_eq!(controller.resumes(), 1);

    // A new request is accepted before the old events are drained
    pauser.start_pause("notepad.exe", "1").await.unwrap();
    assert_eq!(controller.suspends(), 2);
    timeout(Duration::from_secs(3600), pauser.shutdown())
        .await
        .expect("shutdown waited for the event consumer")
        .unwrap();
    assert_eq!(controller.resumes(), 2);
    assert!(!controller.is_suspended());
}
