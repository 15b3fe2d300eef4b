use crate::{
    AppCommand, AppResult, FeedbackTimer, Notifier, TrayEvent, TrayIconState, TrayManager,
    config::Config, menu_ids::command_for_icon_event,
};

use std::time::{Duration, Instant};

use nap_toggler_core::{CombinedMode, NapManager, Setting, SystemCommandRunner};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Main application state.
///
/// Owned by the event loop closure on the main thread. Every toggle runs
/// synchronously there, so clicks are handled strictly one after another.
pub struct App {
    pub(crate) manager: NapManager<SystemCommandRunner>,
    pub(crate) tray: TrayManager,
    pub(crate) notifier: Notifier,
    pub(crate) feedback: FeedbackTimer,
    pub(crate) feedback_duration: Duration,
}

impl App {
    /// Read the current settings and create the status item for them.
    #[track_caller]
    #[instrument(skip(config))]
    pub(crate) fn new(config: &Config) -> AppResult<Self> {
        let manager = NapManager::with_prompt(
            SystemCommandRunner::default(),
            config.privilege.prompt.clone(),
        );

        let tray = TrayManager::new(manager.snapshot())?;
        let notifier = Notifier::new(config.feedback.notify);

        info!(notifications = notifier.is_enabled(), "NapToggler started");

        Ok(Self {
            manager,
            tray,
            notifier,
            feedback: FeedbackTimer::default(),
            feedback_duration: config.feedback.duration(),
        })
    }

    /// Translate a raw tray event into a command for this app.
    pub(crate) fn command_for(&self, event: &TrayEvent) -> Option<AppCommand> {
        match event {
            TrayEvent::Icon(event) => command_for_icon_event(event),
            TrayEvent::Menu(event) => self.tray.menu_ids().command_for(&event.id),
        }
    }

    /// Run a toggle command. `Quit` is handled by the event loop.
    #[instrument(skip(self))]
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) {
        let toggle_id = Uuid::new_v4();

        match cmd {
            AppCommand::ToggleAll => {
                info!(toggle_id = %toggle_id, "Status item clicked");
                let intended = self.manager.toggle_all();
                let mode = self.show_feedback();
                if mode != intended {
                    warn!(toggle_id = %toggle_id, %intended, %mode, "Settings did not change");
                }
                info!(toggle_id = %toggle_id, %mode, "Toggle finished");
            }
            AppCommand::ToggleSetting(setting) => {
                info!(toggle_id = %toggle_id, %setting, "Single toggle requested");
                let new_state = match setting {
                    Setting::PowerNap => self.manager.toggle_power_nap(),
                    Setting::TcpKeepalive => self.manager.toggle_tcp_keepalive(),
                };
                info!(toggle_id = %toggle_id, %setting, %new_state, "Toggle finished");
                self.refresh(false);
            }
            AppCommand::Quit => {
                info!("Quit requested from tray menu");
            }
        }
    }

    /// Restore the status symbol once the feedback time is over.
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.feedback.take_expired(now) {
            self.refresh(false);
        }
    }

    /// When the event loop should wake up next.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.feedback.deadline()
    }

    /// Redraw with the feedback message for what the OS now reports.
    fn show_feedback(&mut self) -> CombinedMode {
        self.feedback.start(Instant::now(), self.feedback_duration);
        let mode = self.refresh(true);

        if let Err(e) = self.notifier.notify(mode) {
            warn!(error = ?e, "Failed to show notification");
        }

        mode
    }

    /// Re-read the settings and redraw the status item.
    fn refresh(&mut self, feedback: bool) -> CombinedMode {
        let snapshot = self.manager.snapshot();
        let state = TrayIconState::for_snapshot(&snapshot, feedback);

        if let Err(e) = self.tray.update(state, snapshot) {
            error!(error = ?e, "Failed to update tray icon");
        }

        snapshot.mode()
    }
}
