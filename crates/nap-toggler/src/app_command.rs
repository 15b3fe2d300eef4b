use nap_toggler_core::Setting;

/// Commands the tray sends to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Invert PowerNap and TCP keepalive together.
    ToggleAll,
    /// Invert a single setting.
    ToggleSetting(Setting),
    /// Request application shutdown.
    Quit,
}
