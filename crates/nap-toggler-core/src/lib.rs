//! nap-toggler Core Library
//!
//! Reads and toggles the macOS PowerNap and TCP keepalive settings by
//! shelling out to `pmset` and `sysctl`.
//!
//! # Example
//!
//! ```no_run
//! use nap_toggler_core::{NapManager, SystemCommandRunner};
//!
//! let manager = NapManager::new(SystemCommandRunner::default());
//!
//! println!("PowerNap is {}", manager.read_power_nap_state());
//! let mode = manager.toggle_all();
//! println!("Now in {} mode", mode);
//! ```

mod error;
mod exec;
mod manager;
mod power;

pub use {
    error::CoreError,
    error::Result as CoreResult,
    exec::{CommandRunner, SystemCommandRunner, applescript_escape, privileged_script},
    manager::{DEFAULT_PRIVILEGE_PROMPT, NapManager},
    power::{CombinedMode, PowerState, Setting, SettingsSnapshot, parse_flag},
};

#[cfg(test)]
mod tests;
