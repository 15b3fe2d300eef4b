use crate::{CombinedMode, PowerState, Setting, SettingsSnapshot, parse_flag};

/// WHAT: Output containing `1` reads as On, anything else as Off
/// WHY: The reader's only parsing rule
#[test]
fn given_query_output_when_parsing_flag_then_on_iff_contains_one() {
    // Given/When/Then: Outputs with and without a `1`
    assert_eq!(parse_flag("net.inet.tcp.always_keepalive: 1"), PowerState::On);
    assert_eq!(parse_flag(" powernap             1"), PowerState::On);
    assert_eq!(parse_flag("net.inet.tcp.always_keepalive: 0"), PowerState::Off);
    assert_eq!(parse_flag(""), PowerState::Off);
    assert_eq!(parse_flag("garbage"), PowerState::Off);
}

/// WHAT: PowerNap reading ignores other `pmset -g` lines
/// WHY: `standby 1` must not make PowerNap look enabled
#[test]
fn given_pmset_output_when_filtering_then_only_powernap_lines_kept() {
    // Given: pmset output where only unrelated settings are 1
    let output = "Currently in use:\n standby              1\n powernap             0\n";

    // When: Narrowing to the PowerNap part
    let relevant = Setting::PowerNap.relevant_output(output);

    // Then: Only the powernap line survives and reads Off
    assert_eq!(relevant, " powernap             0");
    assert_eq!(parse_flag(&relevant), PowerState::Off);
}

/// WHAT: Missing powernap line reads as Off
/// WHY: Machines without PowerNap support print no such line
#[test]
fn given_pmset_output_without_powernap_when_filtering_then_reads_off() {
    // Given: pmset output with no powernap line
    let output = "Currently in use:\n standby              1\n";

    // When: Parsing the PowerNap part
    let state = parse_flag(&Setting::PowerNap.relevant_output(output));

    // Then: Off
    assert_eq!(state, PowerState::Off);
}

/// WHAT: Write commands match the pmset and sysctl syntax
/// WHY: These strings go straight to a root shell
#[test]
fn given_setting_and_state_when_building_write_command_then_matches_cli_syntax() {
    // Given/When/Then: Each setting with each state
    assert_eq!(
        Setting::PowerNap.write_command(PowerState::On),
        "pmset -a powernap 1"
    );
    assert_eq!(
        Setting::PowerNap.write_command(PowerState::Off),
        "pmset -a powernap 0"
    );
    assert_eq!(
        Setting::TcpKeepalive.write_command(PowerState::Off),
        "sysctl -w net.inet.tcp.always_keepalive=0"
    );
}

/// WHAT: Snapshot writes both settings as one command line
/// WHY: One credential prompt per toggle
#[test]
fn given_snapshot_when_building_write_command_then_both_settings_joined() {
    // Given: PowerNap On, TCP keepalive Off
    let snapshot = SettingsSnapshot {
        power_nap: PowerState::On,
        tcp_keepalive: PowerState::Off,
    };

    // When: Building the command
    let command = snapshot.write_command();

    // Then: Both fragments in one line
    assert_eq!(
        command,
        "pmset -a powernap 1; sysctl -w net.inet.tcp.always_keepalive=0"
    );
}

/// WHAT: Mode is power-saving only when both settings are Off
/// WHY: Defines what the icon and message show
#[test]
fn given_every_combination_when_deriving_mode_then_power_saving_iff_both_off() {
    let states = [PowerState::On, PowerState::Off];

    for power_nap in states {
        for tcp_keepalive in states {
            // Given: One combination
            let snapshot = SettingsSnapshot {
                power_nap,
                tcp_keepalive,
            };

            // When: Deriving the mode
            let mode = snapshot.mode();

            // Then: Power-saving exactly when both are Off
            let both_off = power_nap == PowerState::Off && tcp_keepalive == PowerState::Off;
            assert_eq!(mode == CombinedMode::PowerSaving, both_off);
        }
    }
}

/// WHAT: Mode renders as the user-facing strings
/// WHY: Callers display these directly
#[test]
fn given_mode_when_displayed_then_renders_expected_text() {
    assert_eq!(CombinedMode::PowerSaving.to_string(), "power-saving");
    assert_eq!(CombinedMode::Normal.to_string(), "normal");
    assert_eq!(CombinedMode::PowerSaving.status_symbol(), "💤");
    assert_eq!(CombinedMode::Normal.status_symbol(), "🔆");
    assert_eq!(CombinedMode::PowerSaving.message(), "✅ Saving Battery");
    assert_eq!(CombinedMode::Normal.message(), "☀️ Normal Mode");
}

/// WHAT: Inverting twice restores the original snapshot
/// WHY: Toggle relies on this for its round trip
#[test]
fn given_snapshot_when_inverted_twice_then_unchanged() {
    // Given: Mixed snapshot
    let snapshot = SettingsSnapshot {
        power_nap: PowerState::Off,
        tcp_keepalive: PowerState::On,
    };

    // When/Then: Double inversion is identity, single inversion flips both
    assert_eq!(snapshot.inverted().inverted(), snapshot);
    assert_eq!(snapshot.inverted().power_nap, PowerState::On);
    assert_eq!(snapshot.inverted().tcp_keepalive, PowerState::Off);
}
