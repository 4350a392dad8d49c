use crate::paint::Color;

/// Surface response to lights.
///
/// Diffuse and ambient reflectance come from the vertex color; the material
/// only carries the specular term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub specular: Color,
    /// Specular exponent, `0..=128`.
    pub shininess: f32,
}

impl Material {
    /// No specular highlight.
    pub const MATTE: Self = Self {
        specular: Color::BLACK,
        shininess: 0.0,
    };

    pub const fn new(specular: Color, shininess: f32) -> Self {
        Self { specular, shininess }
    }

    pub fn clamped_shininess(&self) -> f32 {
        self.shininess.clamp(0.0, 128.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::MATTE
    }
}

/// How fragments combine with what is already in the color target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Fragments replace the target.
    #[default]
    Opaque,
    /// `src * src.a + dst * (1 - src.a)`.
    Alpha,
}

impl BlendMode {
    pub fn blend_state(self) -> Option<wgpu::BlendState> {
        match self {
            BlendMode::Opaque => None,
            BlendMode::Alpha => Some(wgpu::BlendState::ALPHA_BLENDING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_matte() {
        assert_eq!(Material::default(), Material::MATTE);
    }

    #[test]
    fn shininess_is_clamped() {
        assert_eq!(Material::new(Color::WHITE, 500.0).clamped_shininess(), 128.0);
        assert_eq!(Material::new(Color::WHITE, -1.0).clamped_shininess(), 0.0);
    }

    #[test]
    fn alpha_blend_uses_source_alpha() {
        let state = BlendMode::Alpha.blend_state().unwrap();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert!(BlendMode::Opaque.blend_state().is_none());
    }
}
