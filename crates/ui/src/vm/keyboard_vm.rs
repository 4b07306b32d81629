use dioxus::prelude::{Key, Modifiers};
use roadmap_core::model::PhaseId;

/// Highest phase reachable with a digit key.
pub const MAX_KEYBOARD_PHASE: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    CloseComparison,
    ScrollToPhase(PhaseId),
    TogglePhase(PhaseId),
}

/// Map a key press to a command.
///
/// `focused_header` is the phase whose header has focus, if any; Space only
/// toggles in that case. Digit shortcuts are ignored while Ctrl, Alt or Meta
/// is held.
#[must_use]
pub fn key_command(
    key: &Key,
    modifiers: Modifiers,
    focused_header: Option<PhaseId>,
) -> Option<KeyCommand> {
    match key {
        Key::Escape => Some(KeyCommand::CloseComparison),
        Key::Character(value) if value == " " => focused_header.map(KeyCommand::TogglePhase),
        Key::Character(value) => {
            let mut chars = value.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return None;
            };
            if modifiers.intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META) {
                return None;
            }
            PhaseId::from_digit(ch)
                .filter(|phase| phase.value() <= MAX_KEYBOARD_PHASE)
                .map(KeyCommand::ScrollToPhase)
        }
        _ => None,
    }
}
