use crate::AppCommand;

use nap_toggler_core::Setting;
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuId};

/// IDs of the actionable context menu items.
#[derive(Debug, Clone)]
pub struct MenuIds {
    /// "Toggle PowerNap".
    pub toggle_power_nap: MenuId,
    /// "Toggle TCP Keepalive".
    pub toggle_tcp_keepalive: MenuId,
    /// "Quit".
    pub quit: MenuId,
}

impl MenuIds {
    /// Map a menu selection to a command.
    pub fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        if *id == self.toggle_power_nap {
            Some(AppCommand::ToggleSetting(Setting::PowerNap))
        } else if *id == self.toggle_tcp_keepalive {
            Some(AppCommand::ToggleSetting(Setting::TcpKeepalive))
        } else if *id == self.quit {
            Some(AppCommand::Quit)
        } else {
            None
        }
    }
}

/// Map a status item event to a command.
///
/// Only a released left click toggles; the right click opens the menu.
pub fn command_for_icon_event(event: &TrayIconEvent) -> Option<AppCommand> {
    match event {
        TrayIconEvent::Click {
            button,
            button_state,
            ..
        } => command_for_click(*button, *button_state),
        _ => None,
    }
}

/// Map a mouse button transition on the status item to a command.
pub fn command_for_click(button: MouseButton, state: MouseButtonState) -> Option<AppCommand> {
    match (button, state) {
        (MouseButton::Left, MouseButtonState::Up) => Some(AppCommand::ToggleAll),
        _ => None,
    }
}
