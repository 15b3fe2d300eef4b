use crate::{CombinedMode, PowerState, Setting};

/// Both settings as read at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsSnapshot {
    /// PowerNap state.
    pub power_nap: PowerState,
    /// TCP keepalive state.
    pub tcp_keepalive: PowerState,
}

impl SettingsSnapshot {
    /// Snapshot with every setting flipped.
    pub fn inverted(self) -> Self {
        Self {
            power_nap: self.power_nap.inverted(),
            tcp_keepalive: self.tcp_keepalive.inverted(),
        }
    }

    /// State of one setting.
    pub fn get(&self, setting: Setting) -> PowerState {
        match setting {
            Setting::PowerNap => self.power_nap,
            Setting::TcpKeepalive => self.tcp_keepalive,
        }
    }

    /// Power-saving iff both settings are Off.
    pub fn mode(&self) -> CombinedMode {
        if self.power_nap == PowerState::Off && self.tcp_keepalive == PowerState::Off {
            CombinedMode::PowerSaving
        } else {
            CombinedMode::Normal
        }
    }

    /// One shell command line applying every setting in this snapshot.
    pub fn write_command(&self) -> String {
        Setting::ALL
            .iter()
            .map(|setting| setting.write_command(self.get(*setting)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
