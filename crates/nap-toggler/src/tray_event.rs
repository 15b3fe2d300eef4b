use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Raw tray events forwarded into the main event loop.
///
/// tray-icon delivers these from its own handlers; they are re-sent through
/// the `tao` event loop proxy so every one is handled on the main thread.
#[derive(Debug, Clone)]
pub enum TrayEvent {
    /// Click or hover on the status item.
    Icon(TrayIconEvent),
    /// Context menu selection.
    Menu(MenuEvent),
}
