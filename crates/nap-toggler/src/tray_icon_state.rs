use nap_toggler_core::{CombinedMode, SettingsSnapshot};

/// What the status item is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Resting state: the mode symbol.
    Status(CombinedMode),
    /// Briefly after a toggle: the feedback message for the new mode.
    Feedback(CombinedMode),
}

impl TrayIconState {
    /// Display state for settings as just read from the OS.
    ///
    /// Feedback reports the re-read mode, so a denied prompt shows the
    /// unchanged mode rather than the one the toggle aimed for.
    pub fn for_snapshot(snapshot: &SettingsSnapshot, feedback: bool) -> Self {
        if feedback {
            TrayIconState::Feedback(snapshot.mode())
        } else {
            TrayIconState::Status(snapshot.mode())
        }
    }

    /// Text shown next to the icon in the menu bar.
    pub fn title(&self) -> &'static str {
        match self {
            TrayIconState::Status(mode) => mode.status_symbol(),
            TrayIconState::Feedback(mode) => mode.message(),
        }
    }

    /// Hover tooltip.
    pub fn tooltip(&self) -> String {
        match self {
            TrayIconState::Status(mode) => format!("NapToggler - {} mode", mode),
            TrayIconState::Feedback(mode) => format!("NapToggler - {}", mode.message()),
        }
    }
}
