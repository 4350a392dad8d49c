use glam::{Mat4, Vec3};

/// Look-at camera with a perspective projection.
///
/// Right-handed, depth mapped to `[0, 1]` as wgpu expects.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target`, 45° vertical FOV.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn with_perspective(self, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            near,
            far,
            ..self
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn target_projects_to_screen_center() {
        let clip = camera().view_projection(4.0 / 3.0) * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn nearer_points_have_smaller_depth() {
        let vp = camera().view_projection(1.0);
        let depth = |z: f32| {
            let c = vp * Vec3::new(0.0, 0.0, z).extend(1.0);
            c.z / c.w
        };
        assert!(depth(1.0) < depth(-1.0));
    }

    #[test]
    fn right_of_target_is_right_on_screen() {
        let clip = camera().view_projection(1.0) * Vec3::new(2.0, 0.0, 0.0).extend(1.0);
        assert!(clip.x / clip.w > 0.0);
    }

    #[test]
    fn with_perspective_converts_degrees() {
        let cam = camera().with_perspective(90.0, 1.0, 10.0);
        assert!((cam.fov_y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(cam.far, 10.0);
    }
}
