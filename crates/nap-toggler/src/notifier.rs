//! Optional desktop notification after a toggle.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use nap_toggler_core::CombinedMode;
use notify_rust::Notification;
use tracing::{debug, instrument};

const SUMMARY: &str = "NapToggler";

/// Posts the toggle result as a desktop notification when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    /// Create a notifier. A disabled notifier does nothing.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether notifications will be posted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the feedback message for `mode`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn notify(&self, mode: CombinedMode) -> AppResult<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(SUMMARY)
            .body(mode.message())
            .show()
            .map(|_| ())
            .map_err(|e| AppError::NotificationError {
                reason: format!("Failed to show notification: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(%mode, "Notification shown");

        Ok(())
    }
}
