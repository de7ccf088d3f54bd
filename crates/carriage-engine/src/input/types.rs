/// Keys the studio reacts to; everything else is `Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    ArrowUp,
    ArrowDown,

    /// Platform key code not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Pointer button event. The whole window is one click surface, so no
/// position is carried.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: ButtonState,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: ButtonState,
        /// True for auto-repeat presses.
        repeat: bool,
    },

    PointerButton(PointerButtonEvent),
}

impl InputEvent {
    /// True for a fresh (non-repeat) press of `key`.
    pub fn is_key_press(&self, key: Key) -> bool {
        matches!(
            self,
            InputEvent::Key { key: k, state: ButtonState::Pressed, repeat: false } if *k == key
        )
    }

    /// True for a press of `button`.
    pub fn is_button_press(&self, button: MouseButton) -> bool {
        matches!(
            self,
            InputEvent::PointerButton(PointerButtonEvent { button: b, state: ButtonState::Pressed, .. })
                if *b == button
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: ButtonState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn key_press_ignores_release_and_repeat() {
        assert!(key(Key::Space, ButtonState::Pressed, false).is_key_press(Key::Space));
        assert!(!key(Key::Space, ButtonState::Released, false).is_key_press(Key::Space));
        assert!(!key(Key::Space, ButtonState::Pressed, true).is_key_press(Key::Space));
        assert!(!key(Key::Enter, ButtonState::Pressed, false).is_key_press(Key::Space));
    }

    #[test]
    fn button_press_matches_button() {
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
        });
        assert!(ev.is_button_press(MouseButton::Left));
        assert!(!ev.is_button_press(MouseButton::Right));
    }
}
