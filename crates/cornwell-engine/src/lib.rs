//! Cornwell engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo binary: the winit
//! loop, the wgpu device with its depth buffer, input translation, frame timing
//! and a lit-mesh renderer.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
