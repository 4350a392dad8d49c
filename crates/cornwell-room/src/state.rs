use std::fmt;

use cornwell_engine::input::{Key, KeyAction};

/// Transparency when the scene is drawn opaque.
pub const OPAQUE: f32 = 1.0;
/// Transparency after toggling with `T`.
pub const TRANSLUCENT: f32 = 0.5;

/// Flags that change how the scene is drawn. Mutated only by key presses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    /// `1.0` draws opaque, anything lower enables alpha blending.
    pub transparency: f32,
    pub mirrored: bool,
    /// Light two is always on.
    pub light_one_enabled: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            transparency: OPAQUE,
            mirrored: false,
            light_one_enabled: true,
        }
    }
}

/// A state change bound to a key.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Toggle {
    Mirror,
    Transparency,
    LightOne,
}

impl Toggle {
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::M => Some(Toggle::Mirror),
            Key::T => Some(Toggle::Transparency),
            Key::L => Some(Toggle::LightOne),
            _ => None,
        }
    }
}

impl RenderState {
    /// Applies the toggle bound to `key`, if any.
    ///
    /// Only the initial press counts; auto-repeat and release are ignored.
    pub fn on_key_event(&mut self, key: Key, action: KeyAction) -> Option<Toggle> {
        if action != KeyAction::Press {
            return None;
        }
        let toggle = Toggle::for_key(key)?;
        self.apply(toggle);
        Some(toggle)
    }

    pub fn apply(&mut self, toggle: Toggle) {
        match toggle {
            Toggle::Mirror => self.mirrored = !self.mirrored,
            Toggle::Transparency => {
                self.transparency = if self.transparency == OPAQUE {
                    TRANSLUCENT
                } else {
                    OPAQUE
                };
            }
            Toggle::LightOne => self.light_one_enabled = !self.light_one_enabled,
        }
    }

    pub fn is_blended(&self) -> bool {
        self.transparency < OPAQUE
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mirrored={} transparency={} light_one={}",
            self.mirrored,
            self.transparency,
            if self.light_one_enabled { "on" } else { "off" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut RenderState, key: Key) -> Option<Toggle> {
        state.on_key_event(key, KeyAction::Press)
    }

    #[test]
    fn starts_opaque_unmirrored_with_light_on() {
        let s = RenderState::default();
        assert_eq!(s.transparency, 1.0);
        assert!(!s.mirrored);
        assert!(s.light_one_enabled);
        assert!(!s.is_blended());
    }

    #[test]
    fn m_twice_restores_mirror_flag() {
        let mut s = RenderState::default();
        assert_eq!(press(&mut s, Key::M), Some(Toggle::Mirror));
        assert!(s.mirrored);
        press(&mut s, Key::M);
        assert!(!s.mirrored);
    }

    #[test]
    fn t_alternates_between_opaque_and_half() {
        let mut s = RenderState::default();
        press(&mut s, Key::T);
        assert_eq!(s.transparency, 0.5);
        assert!(s.is_blended());
        press(&mut s, Key::T);
        assert_eq!(s.transparency, 1.0);
        press(&mut s, Key::T);
        assert_eq!(s.transparency, 0.5);
    }

    #[test]
    fn l_toggles_light_one() {
        let mut s = RenderState::default();
        press(&mut s, Key::L);
        assert!(!s.light_one_enabled);
        press(&mut s, Key::L);
        assert!(s.light_one_enabled);
    }

    #[test]
    fn repeat_and_release_are_ignored() {
        let mut s = RenderState::default();
        assert_eq!(s.on_key_event(Key::M, KeyAction::Repeat), None);
        assert_eq!(s.on_key_event(Key::T, KeyAction::Release), None);
        assert_eq!(s, RenderState::default());
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut s = RenderState::default();
        for key in [Key::A, Key::Escape, Key::Digit1, Key::Unknown(42)] {
            assert_eq!(press(&mut s, key), None);
        }
        assert_eq!(s, RenderState::default());
    }

    #[test]
    fn toggles_are_independent() {
        let mut s = RenderState::default();
        press(&mut s, Key::M);
        press(&mut s, Key::T);
        press(&mut s, Key::L);
        assert!(s.mirrored);
        assert_eq!(s.transparency, 0.5);
        assert!(!s.light_one_enabled);
    }

    #[test]
    fn non_opaque_value_toggles_back_to_opaque() {
        let mut s = RenderState {
            transparency: 0.25,
            ..RenderState::default()
        };
        s.apply(Toggle::Transparency);
        assert_eq!(s.transparency, 1.0);
    }
}
