use glam::Mat4;

use crate::render::{Material, MeshId};

/// One mesh instance to draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshDraw {
    pub mesh: MeshId,
    /// Object-to-world transform.
    pub model: Mat4,
    pub material: Material,
    /// Fragment alpha; only visible with `BlendMode::Alpha`.
    pub alpha: f32,
}

impl MeshDraw {
    pub fn new(mesh: MeshId) -> Self {
        Self {
            mesh,
            model: Mat4::IDENTITY,
            material: Material::MATTE,
            alpha: 1.0,
        }
    }

    pub fn with_model(self, model: Mat4) -> Self {
        Self { model, ..self }
    }

    pub fn with_material(self, material: Material) -> Self {
        Self { material, ..self }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}
