use crate::{AppCommand, MenuIds, menu_ids::command_for_click};

use nap_toggler_core::Setting;
use tray_icon::{MouseButton, MouseButtonState, menu::MenuId};

fn menu_ids() -> MenuIds {
    MenuIds {
        toggle_power_nap: MenuId::new("toggle-power-nap"),
        toggle_tcp_keepalive: MenuId::new("toggle-tcp-keepalive"),
        quit: MenuId::new("quit"),
    }
}

/// WHAT: Each menu item maps to its command
/// WHY: Menu selections must reach the right handler
#[test]
fn given_menu_ids_when_mapping_then_each_item_has_its_command() {
    // Given: Known menu IDs
    let ids = menu_ids();

    // When/Then: Each ID maps to its command
    assert_eq!(
        ids.command_for(&MenuId::new("toggle-power-nap")),
        Some(AppCommand::ToggleSetting(Setting::PowerNap))
    );
    assert_eq!(
        ids.command_for(&MenuId::new("toggle-tcp-keepalive")),
        Some(AppCommand::ToggleSetting(Setting::TcpKeepalive))
    );
    assert_eq!(ids.command_for(&MenuId::new("quit")), Some(AppCommand::Quit));
}

/// WHAT: Unknown menu IDs are ignored
/// WHY: Disabled status lines must not trigger anything
#[test]
fn given_unknown_menu_id_when_mapping_then_none() {
    let ids = menu_ids();

    assert_eq!(ids.command_for(&MenuId::new("power-nap-status")), None);
}

/// WHAT: Only a released left click toggles
/// WHY: Right click opens the menu; press + release must not toggle twice
#[test]
fn given_click_when_mapping_then_only_left_up_toggles() {
    assert_eq!(
        command_for_click(MouseButton::Left, MouseButtonState::Up),
        Some(AppCommand::ToggleAll)
    );
    assert_eq!(
        command_for_click(MouseButton::Left, MouseButtonState::Down),
        None
    );
    assert_eq!(
        command_for_click(MouseButton::Right, MouseButtonState::Up),
        None
    );
}
