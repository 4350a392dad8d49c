//! GPU rendering subsystem.
//!
//! Renderers consume a [`SceneFrame`](crate::scene::SceneFrame) and issue GPU
//! commands via wgpu. Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - world space is right-handed, +Y up
//! - the color target is cleared by `FrameCtx::render` before renderers run

mod camera;
mod ctx;
mod light;
mod lit;
mod material;
mod mesh;

pub use camera::Camera;
pub use ctx::{RenderCtx, RenderTarget};
pub use light::{LightRig, PointLight, MAX_LIGHTS};
pub use lit::LitRenderer;
pub use material::{BlendMode, Material};
pub use mesh::{CubeFaces, Mesh, MeshId, Vertex};
