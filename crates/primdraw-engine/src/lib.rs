//! Primdraw engine crate.
//!
//! This crate owns the pieces of a click-to-draw canvas that do not depend on a
//! window system: pointer mapping into normalized device coordinates, grid and
//! primitive tessellation, and the session state driving them. A GUI shell
//! feeds it `input::InputEvent`s or `session::Command`s and replays the
//! resulting `scene::DrawList` through a `render::Renderer`.

pub mod config;
pub mod coords;
pub mod error;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod session;

pub use error::DomainError;
