//! Paint model shared between the session and renderers.
//!
//! Shapes are drawn with a single flat color; there is no alpha, gradient or
//! per-vertex color.

pub mod color;

pub use color::Rgb;
