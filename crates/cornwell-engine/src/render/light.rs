use glam::{Vec3, Vec4};

use crate::paint::Color;

/// Number of light slots the lit pipeline evaluates.
pub const MAX_LIGHTS: usize = 2;

/// A light in world space.
///
/// `position.w == 1` is a positional light, `0` a directional one (the
/// xyz then point towards the light).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec4,
    pub diffuse: Color,
    pub specular: Color,
    pub enabled: bool,
}

impl PointLight {
    pub const OFF: Self = Self {
        position: Vec4::ZERO,
        diffuse: Color::BLACK,
        specular: Color::BLACK,
        enabled: false,
    };

    /// Positional light with the given diffuse color and no specular.
    pub fn at(position: Vec3, diffuse: Color) -> Self {
        Self {
            position: position.extend(1.0),
            diffuse,
            specular: Color::BLACK,
            enabled: true,
        }
    }

    pub fn with_specular(self, specular: Color) -> Self {
        Self { specular, ..self }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

/// All lights contributing to a frame, plus the global ambient term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightRig {
    pub ambient: Color,
    pub lights: [PointLight; MAX_LIGHTS],
}

impl LightRig {
    pub fn new(ambient: Color) -> Self {
        Self {
            ambient,
            lights: [PointLight::OFF; MAX_LIGHTS],
        }
    }

    /// Places `light` in `slot`. Slots past `MAX_LIGHTS` are ignored with a warning.
    pub fn with_light(mut self, slot: usize, light: PointLight) -> Self {
        match self.lights.get_mut(slot) {
            Some(l) => *l = light,
            None => log::warn!("light slot {slot} out of range (max {MAX_LIGHTS})"),
        }
        self
    }

    pub fn is_enabled(&self, slot: usize) -> bool {
        self.lights.get(slot).is_some_and(|l| l.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.lights.iter().filter(|l| l.enabled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rig_is_dark() {
        let rig = LightRig::new(Color::gray(0.2));
        assert_eq!(rig.enabled_count(), 0);
    }

    #[test]
    fn slots_are_independent() {
        let rig = LightRig::new(Color::BLACK)
            .with_light(0, PointLight::at(Vec3::ONE, Color::WHITE).with_enabled(false))
            .with_light(1, PointLight::at(Vec3::NEG_X, Color::WHITE));
        assert!(!rig.is_enabled(0));
        assert!(rig.is_enabled(1));
        assert_eq!(rig.enabled_count(), 1);
    }

    #[test]
    fn out_of_range_slot_is_ignored() {
        let rig = LightRig::new(Color::BLACK).with_light(7, PointLight::at(Vec3::ONE, Color::WHITE));
        assert_eq!(rig.enabled_count(), 0);
        assert!(!rig.is_enabled(7));
    }

    #[test]
    fn positional_light_has_w_one() {
        assert_eq!(PointLight::at(Vec3::ONE, Color::WHITE).position.w, 1.0);
    }
}
