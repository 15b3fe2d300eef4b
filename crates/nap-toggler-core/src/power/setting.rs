use crate::PowerState;

use std::fmt;

/// The two OS settings this crate manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    /// `pmset` powernap: periodic wake during sleep.
    PowerNap,
    /// `net.inet.tcp.always_keepalive`: keep TCP connections alive during sleep.
    TcpKeepalive,
}

impl Setting {
    /// Both settings, in the order they are applied.
    pub const ALL: [Setting; 2] = [Setting::PowerNap, Setting::TcpKeepalive];

    /// Human-readable label for menus and logs.
    pub fn label(self) -> &'static str {
        match self {
            Setting::PowerNap => "PowerNap",
            Setting::TcpKeepalive => "TCP Keepalive",
        }
    }

    /// Program and arguments of the read-only query.
    pub fn query(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Setting::PowerNap => ("pmset", &["-g"]),
            Setting::TcpKeepalive => ("sysctl", &["net.inet.tcp.always_keepalive"]),
        }
    }

    /// Narrow raw query output down to the part describing this setting.
    ///
    /// `pmset -g` prints every power setting, so only the `powernap` lines
    /// are kept. `sysctl` already prints a single line.
    pub fn relevant_output(self, output: &str) -> String {
        match self {
            Setting::PowerNap => output
                .lines()
                .filter(|line| line.contains("powernap"))
                .collect::<Vec<_>>()
                .join("\n"),
            Setting::TcpKeepalive => output.to_string(),
        }
    }

    /// Shell command that sets this setting to `state`.
    pub fn write_command(self, state: PowerState) -> String {
        match self {
            Setting::PowerNap => format!("pmset -a powernap {}", state.as_flag()),
            Setting::TcpKeepalive => {
                format!("sysctl -w net.inet.tcp.always_keepalive={}", state.as_flag())
            }
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
