// Keyboard shortcuts. Kept free of browser types so it can be tested on the host.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Tree,
    Scatter,
    /// Same effect as a swipe.
    ToggleCard,
    TogglePerf,
    ToggleHint,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "t" | "T" => Some(KeyCommand::Tree),
        "s" | "S" => Some(KeyCommand::Scatter),
        " " | "Spacebar" => Some(KeyCommand::ToggleCard),
        "p" | "P" => Some(KeyCommand::TogglePerf),
        "h" | "H" => Some(KeyCommand::ToggleHint),
        _ => None,
    }
}

/// Whether the browser default for `key` should be suppressed (space scrolls).
#[inline]
pub fn suppresses_default(cmd: KeyCommand) -> bool {
    matches!(cmd, KeyCommand::ToggleCard)
}
