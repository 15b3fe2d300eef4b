use std::fmt;

/// A single binary OS setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Setting enabled (`1`).
    On,
    /// Setting disabled (`0`), or unreadable.
    Off,
}

impl PowerState {
    /// The opposite state.
    pub fn inverted(self) -> Self {
        match self {
            PowerState::On => PowerState::Off,
            PowerState::Off => PowerState::On,
        }
    }

    /// Value passed to `pmset` / `sysctl`.
    pub fn as_flag(self) -> &'static str {
        match self {
            PowerState::On => "1",
            PowerState::Off => "0",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => f.write_str("On"),
            PowerState::Off => f.write_str("Off"),
        }
    }
}

/// Map query output to a state: On iff the text contains `1`.
///
/// This is a plain substring match, not a field-exact parse. Empty or
/// garbled output reads as Off.
pub fn parse_flag(output: &str) -> PowerState {
    if output.contains('1') {
        PowerState::On
    } else {
        PowerState::Off
    }
}
