//! The room: a two-colored cube next to a blue sphere, under two lights.

use cornwell_engine::core::{AppControl, FrameCtx};
use cornwell_engine::render::{BlendMode, LightRig, LitRenderer, Material, Mesh, MeshId, PointLight};
use cornwell_engine::scene::{MeshDraw, SceneFrame};
use glam::Mat4;

use crate::config::{LightConfig, SceneConfig};
use crate::state::RenderState;

/// Light slot toggled with `L`.
pub const LIGHT_ONE: usize = 0;
/// Light slot that is always on.
pub const LIGHT_TWO: usize = 1;

/// GPU handles of the two primitives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneMeshes {
    pub cube: MeshId,
    pub sphere: MeshId,
}

fn point_light(light: &LightConfig) -> PointLight {
    PointLight::at(light.position, light.diffuse).with_specular(light.specular)
}

pub fn lights_for(config: &SceneConfig, state: &RenderState) -> LightRig {
    LightRig::new(config.ambient)
        .with_light(
            LIGHT_ONE,
            point_light(&config.light_one).with_enabled(state.light_one_enabled),
        )
        .with_light(LIGHT_TWO, point_light(&config.light_two))
}

/// Derived every frame, so clearing the mirror flag restores the matte look.
pub fn material_for(config: &SceneConfig, state: &RenderState) -> Material {
    if state.mirrored {
        config.mirror
    } else {
        config.matte
    }
}

pub fn blend_for(state: &RenderState) -> BlendMode {
    if state.is_blended() {
        BlendMode::Alpha
    } else {
        BlendMode::Opaque
    }
}

/// Describes one frame: the cube at the origin, then the sphere beside it.
pub fn build_frame(config: &SceneConfig, state: &RenderState, meshes: SceneMeshes) -> SceneFrame {
    let material = material_for(config, state);

    let mut frame = SceneFrame::new(config.clear, config.camera, lights_for(config, state))
        .with_blend(blend_for(state));

    frame
        .push(
            MeshDraw::new(meshes.cube)
                .with_material(material)
                .with_alpha(state.transparency),
        )
        .push(
            MeshDraw::new(meshes.sphere)
                .with_model(Mat4::from_translation(config.sphere_offset))
                .with_material(material)
                .with_alpha(state.transparency),
        );

    frame
}

/// Owns the lit renderer and the uploaded primitives.
pub struct SceneRenderer {
    config: SceneConfig,
    renderer: LitRenderer,
    meshes: Option<SceneMeshes>,
}

impl SceneRenderer {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            renderer: LitRenderer::new(),
            meshes: None,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Builds and uploads the cube and sphere. Pipelines follow on the first
    /// render, keyed by the surface format.
    pub fn initialize(&mut self, device: &wgpu::Device) -> SceneMeshes {
        if let Some(meshes) = self.meshes {
            return meshes;
        }

        let cfg = &self.config;
        let cube = Mesh::cube(cfg.cube_half_extent, cfg.cube_faces);
        let sphere = Mesh::uv_sphere(
            cfg.sphere_radius,
            cfg.sphere_slices,
            cfg.sphere_stacks,
            cfg.sphere_color,
        );

        let meshes = SceneMeshes {
            cube: self.renderer.upload(device, &cube),
            sphere: self.renderer.upload(device, &sphere),
        };
        log::info!(
            "scene initialized: cube {} tris, sphere {} tris",
            cube.index_count() / 3,
            sphere.index_count() / 3
        );

        self.meshes = Some(meshes);
        meshes
    }

    pub fn render_frame(&mut self, ctx: &mut FrameCtx<'_, '_>, state: &RenderState) -> AppControl {
        let meshes = self.initialize(ctx.gpu.device());
        let frame = build_frame(&self.config, state, meshes);

        let renderer = &mut self.renderer;
        ctx.render(frame.clear, |rctx, target| renderer.render(rctx, target, &frame))
    }
}

#[cfg(test)]
mod tests {
    use cornwell_engine::paint::Color;

    use super::*;

    const MESHES: SceneMeshes = SceneMeshes {
        cube: MeshId(0),
        sphere: MeshId(1),
    };

    #[test]
    fn both_lights_on_by_default() {
        let rig = lights_for(&SceneConfig::default(), &RenderState::default());
        assert!(rig.is_enabled(LIGHT_ONE));
        assert!(rig.is_enabled(LIGHT_TWO));
        assert_eq!(rig.ambient, Color::gray(0.2));
    }

    #[test]
    fn light_one_follows_state_light_two_stays_on() {
        let state = RenderState {
            light_one_enabled: false,
            ..RenderState::default()
        };
        let rig = lights_for(&SceneConfig::default(), &state);
        assert!(!rig.is_enabled(LIGHT_ONE));
        assert!(rig.is_enabled(LIGHT_TWO));
        assert_eq!(rig.enabled_count(), 1);
    }

    #[test]
    fn light_positions_are_fixed() {
        let rig = lights_for(&SceneConfig::default(), &RenderState::default());
        assert_eq!(rig.lights[LIGHT_ONE].position.to_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(rig.lights[LIGHT_TWO].position.to_array(), [-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(rig.lights[LIGHT_ONE].diffuse, Color::WHITE);
        assert_eq!(rig.lights[LIGHT_TWO].diffuse, Color::WHITE);
    }

    #[test]
    fn mirror_material_toggles_both_ways() {
        let cfg = SceneConfig::default();
        let mut state = RenderState::default();
        assert_eq!(material_for(&cfg, &state), Material::MATTE);

        state.mirrored = true;
        let mirror = material_for(&cfg, &state);
        assert_eq!(mirror.specular, Color::WHITE);
        assert_eq!(mirror.shininess, 50.0);

        state.mirrored = false;
        assert_eq!(material_for(&cfg, &state), Material::MATTE);
    }

    #[test]
    fn blending_only_below_full_opacity() {
        let mut state = RenderState::default();
        assert_eq!(blend_for(&state), BlendMode::Opaque);
        state.transparency = 0.5;
        assert_eq!(blend_for(&state), BlendMode::Alpha);
    }

    #[test]
    fn frame_draws_cube_then_translated_sphere() {
        let frame = build_frame(&SceneConfig::default(), &RenderState::default(), MESHES);
        let draws = frame.draws();
        assert_eq!(draws.len(), 2);

        assert_eq!(draws[0].mesh, MESHES.cube);
        assert_eq!(draws[0].model, Mat4::IDENTITY);

        assert_eq!(draws[1].mesh, MESHES.sphere);
        assert_eq!(
            draws[1].model.transform_point3(glam::Vec3::ZERO),
            glam::Vec3::new(2.0, 0.0, 0.0)
        );
        assert_eq!(frame.clear, Color::BLACK);
    }

    #[test]
    fn translucent_frame_carries_alpha() {
        let state = RenderState {
            transparency: 0.5,
            mirrored: true,
            ..RenderState::default()
        };
        let frame = build_frame(&SceneConfig::default(), &state, MESHES);
        assert_eq!(frame.blend, BlendMode::Alpha);
        for draw in frame.draws() {
            assert_eq!(draw.alpha, 0.5);
            assert_eq!(draw.material.shininess, 50.0);
        }
    }
}
