//! Translation of winit input into runtime input events.

use stagehand_core::{KeyEvent, MouseButton};
use winit::event::{ElementState, MouseButton as WinitButton};
use winit::keyboard::Key;

/// Buttons the runtime tracks; others are ignored.
pub fn pointer_button(button: WinitButton) -> Option<MouseButton> {
    match button {
        WinitButton::Left => Some(MouseButton::Left),
        WinitButton::Right => Some(MouseButton::Right),
        WinitButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Runtime name of a logical key: the character itself, or the named-key
/// spelling (`"Backspace"`).
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_string()),
        Key::Named(named) => Some(format!("{:?}", named)),
        _ => None,
    }
}

pub fn key_event(name: String, state: ElementState, repeat: bool) -> KeyEvent {
    match (state, repeat) {
        (ElementState::Pressed, false) => KeyEvent::Pressed(name),
        (ElementState::Pressed, true) => KeyEvent::Repeated(name),
        (ElementState::Released, _) => KeyEvent::Released(name),
    }
}
