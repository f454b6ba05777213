//! Scene types.
//!
//! Responsibilities:
//! - describe what the user has set up (`SceneState` and its parts)
//! - carry renderer-agnostic draw commands for one frame (`DrawList`)
//!
//! Nothing here talks to a GPU; see `render` for the functions that turn a
//! `SceneState` into a `DrawList`.

mod cmd;
mod grid;
mod list;
mod primitive;
mod state;
mod style;

pub use cmd::{DrawCmd, Topology};
pub use grid::GridSpec;
pub use list::DrawList;
pub use primitive::{ParsePrimitiveError, Primitive};
pub use state::{Mode, SceneState};
pub use style::RenderStyle;
