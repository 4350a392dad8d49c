use cornwell_engine::paint::Color;
use cornwell_engine::render::{Camera, CubeFaces, Material};
use cornwell_engine::window::RuntimeConfig;
use glam::Vec3;
use winit::dpi::LogicalSize;

/// Every constant the demo scene is built from.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    pub clear: Color,
    pub camera: Camera,

    pub ambient: Color,
    pub light_one: LightConfig,
    pub light_two: LightConfig,

    pub cube_half_extent: f32,
    pub cube_faces: CubeFaces,

    pub sphere_radius: f32,
    pub sphere_slices: u32,
    pub sphere_stacks: u32,
    pub sphere_color: Color,
    pub sphere_offset: Vec3,

    pub mirror: Material,
    pub matte: Material,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightConfig {
    pub position: Vec3,
    pub diffuse: Color,
    pub specular: Color,
}

impl SceneConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.size,
            resizable: false,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "Cornwell Room".to_string(),
            size: LogicalSize::new(800.0, 600.0),
            clear: Color::BLACK,
            camera: Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
                .with_perspective(45.0, 0.1, 100.0),

            ambient: Color::gray(0.2),
            light_one: LightConfig {
                position: Vec3::new(1.0, 1.0, 1.0),
                diffuse: Color::WHITE,
                specular: Color::WHITE,
            },
            light_two: LightConfig {
                position: Vec3::new(-1.0, 1.0, -1.0),
                diffuse: Color::WHITE,
                specular: Color::BLACK,
            },

            cube_half_extent: 1.0,
            // Sides alternate so every face is one of the two colors.
            cube_faces: CubeFaces {
                front: Color::RED,
                back: Color::GREEN,
                right: Color::GREEN,
                left: Color::RED,
                top: Color::GREEN,
                bottom: Color::RED,
            },

            sphere_radius: 0.5,
            sphere_slices: 50,
            sphere_stacks: 50,
            sphere_color: Color::BLUE,
            sphere_offset: Vec3::new(2.0, 0.0, 0.0),

            mirror: Material::new(Color::WHITE, 50.0),
            matte: Material::MATTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_uses_fixed_window() {
        let rc = SceneConfig::default().runtime_config();
        assert_eq!(rc.title, "Cornwell Room");
        assert_eq!(rc.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(!rc.resizable);
    }

    #[test]
    fn camera_looks_down_negative_z() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.camera.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(cfg.camera.target, Vec3::ZERO);
        assert_eq!(cfg.camera.up, Vec3::Y);
    }

    #[test]
    fn cube_front_red_back_green() {
        let faces = SceneConfig::default().cube_faces;
        assert_eq!(faces.front, Color::RED);
        assert_eq!(faces.back, Color::GREEN);
    }
}
