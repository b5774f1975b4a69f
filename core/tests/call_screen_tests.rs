//! Simulated call lifecycle
//!
//! Runs on a paused clock so the connect, tick and dismiss timers elapse
//! instantly and in order.

use std::time::Duration;
use stitch_core::screens::{CallPhase, CallScreen};
use stitch_core::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

fn params(call_type: CallType, is_incoming: bool) -> CallParams {
    CallParams {
        name: "Sophia Bennett".to_string(),
        avatar: "https://example.com/sophia.png".to_string(),
        call_type,
        is_incoming,
    }
}

fn open(call_type: CallType, is_incoming: bool) -> (CallScreen, UnboundedReceiver<NavCommand>) {
    let (navigator, rx) = Navigator::channel();
    let screen = CallScreen::open(params(call_type, is_incoming), TimingConfig::default(), navigator);
    (screen, rx)
}

fn drain(rx: &mut UnboundedReceiver<NavCommand>) -> Vec<NavCommand> {
    let mut commands = Vec::new();
    while let Ok(cmd) = rx.try_recv() {
        commands.push(cmd);
    }
    commands
}

#[tokio::test(start_paused = true)]
async fn test_auto_connects_after_delay() {
    let (screen, _rx) = open(CallType::Voice, false);

    assert_eq!(screen.phase(), CallPhase::Ringing);
    assert_eq!(screen.status_text(), "Calling...");

    sleep(Duration::from_millis(2900)).await;
    assert_eq!(screen.phase(), CallPhase::Ringing);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(screen.phase(), CallPhase::Connected);
    assert_eq!(screen.status_text(), "00:00");
}

#[tokio::test(start_paused = true)]
async fn test_duration_counts_while_connected() {
    let (screen, _rx) = open(CallType::Voice, false);

    // Connects at 3s, ticks at 4s, 5s, 6s
    sleep(Duration::from_millis(6500)).await;
    assert_eq!(screen.duration_secs(), 3);
    assert_eq!(screen.status_text(), "00:03");

    sleep(Duration::from_secs(62)).await;
    assert_eq!(screen.status_text(), "01:05");
}

#[tokio::test(start_paused = true)]
async fn test_accept_connects_immediately() {
    let (screen, _rx) = open(CallType::Video, true);

    assert!(screen.can_answer());
    assert_eq!(screen.status_text(), "Incoming video call...");
    assert!(screen.accept());
    assert_eq!(screen.phase(), CallPhase::Connected);
    assert!(!screen.can_answer());
    assert!(!screen.accept());

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(screen.phase(), CallPhase::Connected);
    assert_eq!(screen.duration_secs(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_accept_ignored_for_outgoing_call() {
    let (screen, _rx) = open(CallType::Voice, false);

    assert!(!screen.can_answer());
    assert!(!screen.accept());
    assert_eq!(screen.phase(), CallPhase::Ringing);
}

#[tokio::test(start_paused = true)]
async fn test_end_schedules_single_dismissal() {
    let (screen, mut rx) = open(CallType::Voice, false);

    sleep(Duration::from_millis(4500)).await;
    assert_eq!(screen.phase(), CallPhase::Connected);

    assert!(screen.end());
    assert_eq!(screen.phase(), CallPhase::Ended);
    assert_eq!(screen.status_text(), "Call ended");
    assert!(!screen.end());

    let frozen = screen.duration_secs();
    sleep(Duration::from_millis(500)).await;
    assert!(drain(&mut rx).is_empty());

    sleep(Duration::from_secs(5)).await;
    assert_eq!(drain(&mut rx), vec![NavCommand::GoBack]);
    assert_eq!(screen.duration_secs(), frozen);
    assert_eq!(screen.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_end_while_ringing_cancels_connect() {
    let (screen, mut rx) = open(CallType::Video, true);

    sleep(Duration::from_secs(1)).await;
    assert!(screen.end());

    sleep(Duration::from_secs(5)).await;
    assert_eq!(screen.phase(), CallPhase::Ended);
    assert_eq!(screen.duration_secs(), 0);
    assert_eq!(drain(&mut rx), vec![NavCommand::GoBack]);
}

#[tokio::test(start_paused = true)]
async fn test_phase_changes_are_published() {
    let (screen, _rx) = open(CallType::Voice, false);
    let mut phases = screen.phase_changes();

    phases.changed().await.unwrap();
    assert_eq!(*phases.borrow_and_update(), CallPhase::Connected);

    screen.end();
    phases.changed().await.unwrap();
    assert_eq!(*phases.borrow_and_update(), CallPhase::Ended);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_all_timers() {
    let (screen, mut rx) = open(CallType::Voice, false);
    let phases = screen.phase_changes();

    sleep(Duration::from_secs(1)).await;
    drop(screen);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(*phases.borrow(), CallPhase::Ringing);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_after_end_skips_dismissal() {
    let (screen, mut rx) = open(CallType::Voice, false);

    screen.end();
    drop(screen);

    sleep(Duration::from_secs(5)).await;
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_toggles_are_independent_of_phase() {
    let (screen, _rx) = open(CallType::Video, false);

    assert!(screen.toggle_mute());
    assert!(screen.toggle_camera());
    assert!(!screen.toggle_controls());
    assert!(screen.toggle_speaker());
    assert!(!screen.toggle_mute());

    let snapshot = screen.snapshot();
    assert_eq!(snapshot.phase, CallPhase::Ringing);
    assert!(!snapshot.muted);
    assert!(snapshot.camera_off);
    assert!(snapshot.speaker_on);
    assert!(!snapshot.show_controls);
    assert_eq!(snapshot.status_text, "Calling...");
}

#[tokio::test(start_paused = true)]
async fn test_custom_timings() {
    let (navigator, mut rx) = Navigator::channel();
    let timings = TimingConfig {
        connect_delay_ms: 100,
        duration_tick_ms: 50,
        dismiss_delay_ms: 10,
        ..Default::default()
    };
    let screen = CallScreen::open(params(CallType::Voice, true), timings, navigator);

    sleep(Duration::from_millis(375)).await;
    assert_eq!(screen.phase(), CallPhase::Connected);
    assert_eq!(screen.duration_secs(), 5);

    screen.end();
    sleep(Duration::from_millis(20)).await;
    assert_eq!(drain(&mut rx), vec![NavCommand::GoBack]);
}
