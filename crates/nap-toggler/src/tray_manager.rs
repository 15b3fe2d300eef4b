//! Status item with mode-based updates.
//!
//! Shows the combined mode as an icon and title, and a context menu with
//! the current value of each setting, single-setting toggles and Quit.

use crate::{AppError, AppResult, MenuIds, TrayIconState, icon};

use std::panic::Location;

use error_location::ErrorLocation;
use nap_toggler_core::{Setting, SettingsSnapshot};
use tracing::{info, instrument};
use tray_icon::menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem};
use tray_icon::{TrayIcon, TrayIconBuilder};

/// Status item manager. Lives on the main thread: `TrayIcon` is `!Send`.
pub struct TrayManager {
    tray_icon: TrayIcon,
    power_nap_status: MenuItem,
    tcp_keepalive_status: MenuItem,
    menu_ids: MenuIds,
}

impl TrayManager {
    /// Create the status item showing `snapshot`.
    ///
    /// On macOS this must run after the event loop has started.
    #[track_caller]
    #[instrument]
    pub fn new(snapshot: SettingsSnapshot) -> AppResult<Self> {
        let menu = Menu::new();

        let power_nap_status =
            MenuItem::new(status_line(Setting::PowerNap, &snapshot), false, None);
        let tcp_keepalive_status =
            MenuItem::new(status_line(Setting::TcpKeepalive, &snapshot), false, None);
        let toggle_power_nap = MenuItem::new("Toggle PowerNap", true, None);
        let toggle_tcp_keepalive = MenuItem::new("Toggle TCP Keepalive", true, None);
        let quit = MenuItem::new("Quit", true, None);
        let separator = PredefinedMenuItem::separator();

        let items: [&dyn IsMenuItem; 6] = [
            &power_nap_status,
            &tcp_keepalive_status,
            &toggle_power_nap,
            &toggle_tcp_keepalive,
            &separator,
            &quit,
        ];

        for item in items {
            menu.append(item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu item: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let menu_ids = MenuIds {
            toggle_power_nap: toggle_power_nap.id().clone(),
            toggle_tcp_keepalive: toggle_tcp_keepalive.id().clone(),
            quit: quit.id().clone(),
        };

        let state = TrayIconState::Status(snapshot.mode());

        let tray_icon = TrayIconBuilder::new()
            .with_title(state.title())
            .with_tooltip(state.tooltip())
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .with_icon(icon::load(snapshot.mode())?)
            .with_icon_as_template(true)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(mode = %snapshot.mode(), "Status item initialized");

        Ok(Self {
            tray_icon,
            power_nap_status,
            tcp_keepalive_status,
            menu_ids,
        })
    }

    /// Redraw the status item.
    ///
    /// The icon and menu status lines follow `snapshot`; the title and
    /// tooltip follow `state`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update(&mut self, state: TrayIconState, snapshot: SettingsSnapshot) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(icon::load(snapshot.mode())?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon.set_icon_as_template(true);
        self.tray_icon.set_title(Some(state.title()));

        self.tray_icon
            .set_tooltip(Some(state.tooltip()))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.power_nap_status
            .set_text(status_line(Setting::PowerNap, &snapshot));
        self.tcp_keepalive_status
            .set_text(status_line(Setting::TcpKeepalive, &snapshot));

        Ok(())
    }

    /// IDs of the actionable menu items.
    pub fn menu_ids(&self) -> &MenuIds {
        &self.menu_ids
    }
}

/// Menu line describing one setting, e.g. `PowerNap: On`.
pub fn status_line(setting: Setting, snapshot: &SettingsSnapshot) -> String {
    format!("{}: {}", setting, snapshot.get(setting))
}
