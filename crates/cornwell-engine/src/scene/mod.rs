//! Per-frame scene description.
//!
//! A `SceneFrame` is rebuilt every frame from application state: camera,
//! lights, blend mode and an ordered list of mesh draws. It is plain data and
//! holds no GPU resources.

mod draw;
mod frame;

pub use draw::MeshDraw;
pub use frame::SceneFrame;
