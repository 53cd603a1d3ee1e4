// Host-side tests for the keyboard mapping.
// The web crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]

include!("../src/keys.rs");

#[test]
fn formation_keys() {
    assert_eq!(command_for_key("t"), Some(KeyCommand::Tree));
    assert_eq!(command_for_key("T"), Some(KeyCommand::Tree));
    assert_eq!(command_for_key("s"), Some(KeyCommand::Scatter));
    assert_eq!(command_for_key("S"), Some(KeyCommand::Scatter));
}

#[test]
fn space_toggles_card_and_is_swallowed() {
    let cmd = command_for_key(" ");
    assert_eq!(cmd, Some(KeyCommand::ToggleCard));
    assert!(cmd.map(suppresses_default).unwrap_or(false));
    assert!(!suppresses_default(KeyCommand::Tree));
}

#[test]
fn overlay_keys() {
    assert_eq!(command_for_key("p"), Some(KeyCommand::TogglePerf));
    assert_eq!(command_for_key("H"), Some(KeyCommand::ToggleHint));
}

#[test]
fn unmapped_keys() {
    for k in ["a", "Enter", "Escape", "ArrowUp", "", "tt"] {
        assert_eq!(command_for_key(k), None, "{k:?}");
    }
}
