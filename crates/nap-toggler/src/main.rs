//! NapToggler: menu-bar switch between normal and power-saving sleep settings.

mod app;
mod app_command;
mod config;
mod error;
mod feedback_timer;
mod icon;
mod logging;
mod menu_ids;
mod notifier;
#[cfg(test)]
mod tests;
mod tray_event;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    feedback_timer::FeedbackTimer,
    menu_ids::MenuIds,
    notifier::Notifier,
    tray_event::TrayEvent,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::time::Instant;

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, warn};
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    let (config, config_error) = match logging::with_bootstrap(Config::load) {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Held until exit so the file writer flushes.
    let _log_guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    if let Some(e) = config_error {
        warn!(error = ?e, "Failed to load config, using defaults");
    }

    #[allow(unused_mut)]
    let mut event_loop = EventLoopBuilder::<TrayEvent>::with_user_event().build();

    // Menu-bar only: no Dock icon, no app switcher entry.
    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
    }

    let tray_proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = tray_proxy.send_event(TrayEvent::Icon(event));
    }));

    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = menu_proxy.send_event(TrayEvent::Menu(event));
    }));

    // App owns the TrayIcon, which is !Send and on macOS can only be created
    // after the event loop has started.
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => {
                match App::new(&config) {
                    Ok(a) => app = Some(a),
                    Err(e) => {
                        error!("Failed to create App: {:?}", e);
                        std::process::exit(1);
                    }
                }

                // Wake the run loop so the new status item is drawn immediately.
                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }
            }
            Event::UserEvent(tray_event) => {
                if let Some(app) = app.as_mut() {
                    match app.command_for(&tray_event) {
                        Some(AppCommand::Quit) => {
                            app.handle_command(AppCommand::Quit);
                            *control_flow = ControlFlow::ExitWithCode(0);
                            return;
                        }
                        Some(cmd) => app.handle_command(cmd),
                        None => {}
                    }
                }
            }
            _ => {}
        }

        *control_flow = match app.as_mut() {
            Some(app) => {
                app.tick(Instant::now());
                match app.next_deadline() {
                    Some(deadline) => ControlFlow::WaitUntil(deadline),
                    None => ControlFlow::Wait,
                }
            }
            None => ControlFlow::Wait,
        };
    });
}
