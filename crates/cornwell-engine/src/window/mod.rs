//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, and wires them to the GPU layer.

mod error;
mod runtime;

pub use error::{Result, RuntimeError};
pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
