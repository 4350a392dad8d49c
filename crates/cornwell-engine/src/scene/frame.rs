use crate::paint::Color;
use crate::render::{BlendMode, Camera, LightRig};

use super::MeshDraw;

/// Everything the lit renderer needs for one frame.
///
/// Draws are issued in insertion order; with `BlendMode::Alpha` later draws
/// blend over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub clear: Color,
    pub camera: Camera,
    pub lights: LightRig,
    pub blend: BlendMode,
    draws: Vec<MeshDraw>,
}

impl SceneFrame {
    pub fn new(clear: Color, camera: Camera, lights: LightRig) -> Self {
        Self {
            clear,
            camera,
            lights,
            blend: BlendMode::Opaque,
            draws: Vec::new(),
        }
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    pub fn push(&mut self, draw: MeshDraw) -> &mut Self {
        self.draws.push(draw);
        self
    }

    pub fn draws(&self) -> &[MeshDraw] {
        &self.draws
    }
}
