use crate::FeedbackTimer;

use std::time::{Duration, Instant};

/// WHAT: Timer expires once, after its duration
/// WHY: The feedback message must be replaced exactly once
#[test]
fn given_started_timer_when_time_passes_then_expires_once() {
    // Given: A timer started now for two seconds
    let now = Instant::now();
    let mut timer = FeedbackTimer::default();
    timer.start(now, Duration::from_secs(2));

    // When/Then: Not expired before the deadline
    assert_eq!(timer.deadline(), Some(now + Duration::from_secs(2)));
    assert!(!timer.take_expired(now + Duration::from_secs(1)));

    // When/Then: Expired at the deadline, then cleared
    assert!(timer.take_expired(now + Duration::from_secs(2)));
    assert!(timer.deadline().is_none());
    assert!(!timer.take_expired(now + Duration::from_secs(3)));
}

/// WHAT: Idle timer never expires
/// WHY: No redraw without a preceding toggle
#[test]
fn given_idle_timer_when_checked_then_not_expired() {
    let mut timer = FeedbackTimer::default();

    assert!(timer.deadline().is_none());
    assert!(!timer.take_expired(Instant::now()));
}

/// WHAT: Restarting moves the deadline
/// WHY: A second click shows its message for the full duration
#[test]
fn given_running_timer_when_restarted_then_deadline_moves() {
    // Given: A running timer
    let now = Instant::now();
    let mut timer = FeedbackTimer::default();
    timer.start(now, Duration::from_secs(2));

    // When: Restarted one second later
    timer.start(now + Duration::from_secs(1), Duration::from_secs(2));

    // Then: Old deadline no longer expires it
    assert!(!timer.take_expired(now + Duration::from_secs(2)));
    assert!(timer.take_expired(now + Duration::from_secs(3)));
}
