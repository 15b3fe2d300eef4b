mod combined_mode;
mod power_state;
mod setting;
mod snapshot;

pub use {
    combined_mode::CombinedMode,
    power_state::{PowerState, parse_flag},
    setting::Setting,
    snapshot::SettingsSnapshot,
};
