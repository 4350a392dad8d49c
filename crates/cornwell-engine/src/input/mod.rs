//! Input subsystem.
//!
//! Public API is platform-agnostic; winit types stay inside `platform`.
//! The runtime translates window system events into `InputEvent`s.

mod frame;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyAction, KeyState, Modifiers};
