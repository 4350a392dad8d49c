use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps platform keycodes into these variants where possible.
/// For unsupported keys, `Key::Unknown(u32)` carries the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// What a single key event means to a handler.
///
/// Distinguishes the first press from platform auto-repeat, which both arrive
/// as `KeyState::Pressed`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

impl KeyAction {
    #[inline]
    pub fn from_state(state: KeyState, repeat: bool) -> Self {
        match (state, repeat) {
            (KeyState::Released, _) => KeyAction::Release,
            (KeyState::Pressed, true) => KeyAction::Repeat,
            (KeyState::Pressed, false) => KeyAction::Press,
        }
    }
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Stable platform code when available.
        code: u32,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Returns the key and its action for keyboard events.
    pub fn key_action(&self) -> Option<(Key, KeyAction)> {
        match self {
            InputEvent::Key { key, state, repeat, .. } => {
                Some((*key, KeyAction::from_state(*state, *repeat)))
            }
            _ => None,
        }
    }

    /// True for key-down events that are not auto-repeat.
    pub fn is_fresh_press(&self) -> bool {
        matches!(self.key_action(), Some((_, KeyAction::Press)))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key: Key::M,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    #[test]
    fn first_press_is_fresh() {
        assert!(key(KeyState::Pressed, false).is_fresh_press());
        assert_eq!(
            key(KeyState::Pressed, false).key_action(),
            Some((Key::M, KeyAction::Press))
        );
    }

    #[test]
    fn repeat_and_release_are_not_fresh() {
        assert!(!key(KeyState::Pressed, true).is_fresh_press());
        assert!(!key(KeyState::Released, false).is_fresh_press());
        assert_eq!(
            key(KeyState::Released, true).key_action(),
            Some((Key::M, KeyAction::Release))
        );
    }

    #[test]
    fn non_key_events_have_no_action() {
        assert_eq!(InputEvent::Focused(true).key_action(), None);
        assert!(!InputEvent::ModifiersChanged(Modifiers::default()).is_fresh_press());
    }
}
