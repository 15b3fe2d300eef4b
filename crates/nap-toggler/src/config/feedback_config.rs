use crate::config::{
    DEFAULT_FEEDBACK_DURATION_MS, DEFAULT_NOTIFY, default_feedback_duration_ms, default_notify,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the result of a toggle is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// How long the feedback message replaces the status symbol.
    #[serde(default = "default_feedback_duration_ms")]
    pub duration_ms: u64,

    /// Also post a desktop notification.
    #[serde(default = "default_notify")]
    pub notify: bool,
}

impl FeedbackConfig {
    /// Feedback display time as a `Duration`.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_FEEDBACK_DURATION_MS,
            notify: DEFAULT_NOTIFY,
        }
    }
}
