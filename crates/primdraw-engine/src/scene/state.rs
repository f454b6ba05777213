use crate::coords::{Vec2, Viewport};
use crate::paint::Rgb;

use super::{GridSpec, Primitive, RenderStyle};

/// Whether pointer presses place vertices.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Pointer input is ignored.
    #[default]
    Idle,
    /// Pointer input appends vertices.
    Drawing,
}

/// Snapshot of everything a frame is rendered from.
///
/// Produced by `SessionController::snapshot` and consumed by
/// `render::build_frame`. It is never mutated after being handed out, so a
/// renderer on another thread can hold it for the whole frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub primitive: Primitive,
    /// Vertices placed for the current shape, in insertion order.
    pub vertices: Vec<Vec2>,
    pub grid: GridSpec,
    pub style: RenderStyle,
    pub viewport: Viewport,
    pub clear_color: Rgb,
    pub mode: Mode,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            primitive: Primitive::default(),
            vertices: Vec::new(),
            grid: GridSpec::default(),
            style: RenderStyle::default(),
            viewport: Viewport::default(),
            clear_color: Rgb::CLEAR_GRAY,
            mode: Mode::Idle,
        }
    }
}
