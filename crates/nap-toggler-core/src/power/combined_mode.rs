use std::fmt;

/// Mode derived from both settings. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinedMode {
    /// Both PowerNap and TCP keepalive are Off.
    PowerSaving,
    /// Anything else.
    Normal,
}

impl CombinedMode {
    /// Feedback text shown to the user after a toggle.
    pub fn message(self) -> &'static str {
        match self {
            CombinedMode::PowerSaving => "✅ Saving Battery",
            CombinedMode::Normal => "☀️ Normal Mode",
        }
    }

    /// Menu-bar title for this mode.
    pub fn status_symbol(self) -> &'static str {
        match self {
            CombinedMode::PowerSaving => "💤",
            CombinedMode::Normal => "🔆",
        }
    }
}

impl fmt::Display for CombinedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinedMode::PowerSaving => f.write_str("power-saving"),
            CombinedMode::Normal => f.write_str("normal"),
        }
    }
}
