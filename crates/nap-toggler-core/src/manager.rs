//! Reads the current settings and applies their inverse.

use crate::{
    CombinedMode, CommandRunner, CoreResult, PowerState, Setting, SettingsSnapshot, parse_flag,
};

use tracing::{info, instrument, warn};

/// Credential prompt used when none is configured.
pub const DEFAULT_PRIVILEGE_PROMPT: &str =
    "NapToggler needs your password to adjust system sleep settings.";

/// Owns the command runner and implements every read and toggle.
///
/// State is never cached: each call queries the OS again.
#[derive(Debug)]
pub struct NapManager<R: CommandRunner> {
    runner: R,
    prompt: String,
}

impl<R: CommandRunner> NapManager<R> {
    /// Create a manager using the default credential prompt.
    pub fn new(runner: R) -> Self {
        Self::with_prompt(runner, DEFAULT_PRIVILEGE_PROMPT)
    }

    /// Create a manager with a custom credential prompt.
    pub fn with_prompt(runner: R, prompt: impl Into<String>) -> Self {
        Self {
            runner,
            prompt: prompt.into(),
        }
    }

    /// The wrapped runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Current PowerNap state. Unreadable means Off.
    pub fn read_power_nap_state(&self) -> PowerState {
        self.read_state(Setting::PowerNap)
    }

    /// Current TCP keepalive state. Unreadable means Off.
    pub fn read_tcp_keepalive_state(&self) -> PowerState {
        self.read_state(Setting::TcpKeepalive)
    }

    /// Query one setting. Failures are logged and read as Off.
    #[instrument(skip(self))]
    pub fn read_state(&self, setting: Setting) -> PowerState {
        let (program, args) = setting.query();

        match self.runner.query(program, args) {
            Ok(output) => parse_flag(&setting.relevant_output(&output)),
            Err(e) => {
                warn!(%setting, error = ?e, "Setting query failed, treating as Off");
                PowerState::Off
            }
        }
    }

    /// Read both settings.
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            power_nap: self.read_power_nap_state(),
            tcp_keepalive: self.read_tcp_keepalive_state(),
        }
    }

    /// Current combined mode.
    pub fn current_mode(&self) -> CombinedMode {
        self.snapshot().mode()
    }

    /// Invert both settings with one privileged command.
    ///
    /// Returns the mode the settings were switched to. A failed or denied
    /// command is logged, not returned; use [`try_toggle_all`] to observe it.
    ///
    /// [`try_toggle_all`]: NapManager::try_toggle_all
    #[instrument(skip(self))]
    pub fn toggle_all(&self) -> CombinedMode {
        let target = self.snapshot().inverted();

        if let Err(e) = self.apply(&target) {
            warn!(error = ?e, "Toggle command did not complete");
        }

        target.mode()
    }

    /// Invert both settings, reporting a failed privileged command.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn try_toggle_all(&self) -> CoreResult<CombinedMode> {
        let target = self.snapshot().inverted();
        self.apply(&target)?;
        Ok(target.mode())
    }

    /// Invert PowerNap alone. Returns the state it was switched to.
    pub fn toggle_power_nap(&self) -> PowerState {
        self.toggle_setting(Setting::PowerNap)
    }

    /// Invert TCP keepalive alone. Returns the state it was switched to.
    pub fn toggle_tcp_keepalive(&self) -> PowerState {
        self.toggle_setting(Setting::TcpKeepalive)
    }

    /// Invert a single setting with its own privileged command.
    #[instrument(skip(self))]
    pub fn toggle_setting(&self, setting: Setting) -> PowerState {
        let old = self.read_state(setting);
        let new = old.inverted();

        info!(%setting, %old, %new, "Toggling setting");

        if let Err(e) = self
            .runner
            .run_privileged(&setting.write_command(new), &self.prompt)
        {
            warn!(%setting, error = ?e, "Toggle command did not complete");
        }

        new
    }

    #[track_caller]
    fn apply(&self, target: &SettingsSnapshot) -> CoreResult<()> {
        let command = target.write_command();

        info!(
            power_nap = %target.power_nap,
            tcp_keepalive = %target.tcp_keepalive,
            mode = %target.mode(),
            "Applying settings"
        );

        self.runner.run_privileged(&command, &self.prompt)?;

        Ok(())
    }
}
