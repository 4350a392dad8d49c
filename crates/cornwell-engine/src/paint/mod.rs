//! Color model shared between the scene description and renderers.

pub mod color;

pub use color::Color;
