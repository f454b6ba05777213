use crate::coords::Viewport;
use crate::paint::Rgb;
use crate::scene::Primitive;

/// A state transition requested by the controls or the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    SelectPrimitive(Primitive),
    /// Enter drawing mode, discarding any placed vertices.
    StartDrawing,
    /// Leave drawing mode. Placed vertices stay visible.
    StopDrawing,
    AddRow,
    RemoveRow,
    AddColumn,
    RemoveColumn,
    /// Point size and line width, in pixels.
    SetLineWidth(f32),
    SetColor(Rgb),
    /// Primary pointer press at a pixel position on the canvas.
    PointerPressed { x: f32, y: f32 },
    Resize(Viewport),
}

/// What the shell should do after a command was applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandResult {
    /// State changed in a way that affects the frame; request a redraw.
    Redraw,
    /// Nothing visible changed.
    Unchanged,
}

impl CommandResult {
    #[inline]
    pub fn needs_redraw(self) -> bool {
        self == CommandResult::Redraw
    }
}

impl From<bool> for CommandResult {
    /// `true` (state changed) maps to `Redraw`.
    fn from(changed: bool) -> Self {
        if changed { CommandResult::Redraw } else { CommandResult::Unchanged }
    }
}
