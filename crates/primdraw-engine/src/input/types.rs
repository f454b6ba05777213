/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are pixels relative to the canvas' top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

impl PointerButtonEvent {
    /// Primary-button press at `(x, y)`.
    pub fn left_press(x: f32, y: f32) -> Self {
        Self {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        }
    }
}

/// Platform-agnostic input events emitted by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the canvas.
    PointerLeft,

    /// Canvas resized to `width` x `height` pixels.
    Resized { width: f32, height: f32 },
}
