//! AppleScript wrapping for commands that need administrator privileges.

/// Escape text for use inside an AppleScript string literal.
pub fn applescript_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the `osascript -e` script that runs `command` as root.
///
/// macOS shows its credential dialog with `prompt` on every run.
pub fn privileged_script(command: &str, prompt: &str) -> String {
    format!(
        "do shell script \"{}\" with administrator privileges with prompt \"{}\"",
        applescript_escape(command),
        applescript_escape(prompt)
    )
}
