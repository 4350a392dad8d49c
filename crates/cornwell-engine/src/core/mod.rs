//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application, and the lifecycle that gates rendering.

mod app;
mod ctx;
mod lifecycle;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use lifecycle::{Lifecycle, Phase};
