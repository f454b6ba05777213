//! Coordinate types shared by the input mapper and the renderers.
//!
//! Two spaces are in play:
//! - Pixels: origin top-left, +X right, +Y down (what the window reports)
//! - Normalized device coordinates: [-1, 1] on both axes, +Y up
//!
//! `input::map_to_device` converts from the first to the second.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
