use crate::Notifier;

use nap_toggler_core::CombinedMode;

/// WHAT: Disabled notifier succeeds without posting
/// WHY: Notifications are off by default and must never fail a toggle
#[test]
fn given_disabled_notifier_when_notifying_then_ok() {
    // Given: Notifications disabled
    let notifier = Notifier::new(false);

    // When: Notifying
    let result = notifier.notify(CombinedMode::PowerSaving);

    // Then: Nothing to fail
    assert!(!notifier.is_enabled());
    assert!(result.is_ok());
}

/// WHAT: Enabled notifier posts a desktop notification
/// WHY: Confirms the notification backend on a real desktop session
#[test]
#[ignore] // Requires a desktop notification service - run manually with: cargo test -- --ignored
fn given_enabled_notifier_when_notifying_then_ok() {
    let notifier = Notifier::new(true);

    assert!(notifier.notify(CombinedMode::Normal).is_ok());
}
