use ::winit::dpi::{PhysicalPosition, PhysicalSize};
use ::winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

use crate::input::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent, PointerState,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Positions and sizes stay in physical pixels, the unit the surface and the
/// session viewport are sized in. Button events take their position from
/// `pointer`; a press before any cursor movement has no position and is dropped.
///
/// Returns `None` for events not represented by the input subsystem.
pub fn translate_window_event(pointer: &PointerState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_f32(*position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::MouseInput { state, button, .. } => {
            let (x, y) = pointer.position?;
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: map_button_state(*state),
                x,
                y,
            }))
        }

        WindowEvent::Resized(size) => Some(resized(*size)),

        _ => None,
    }
}

fn to_f32(pos: PhysicalPosition<f64>) -> (f32, f32) {
    (pos.x as f32, pos.y as f32)
}

fn resized(size: PhysicalSize<u32>) -> InputEvent {
    InputEvent::Resized {
        width: size.width as f32,
        height: size.height as f32,
    }
}

fn map_button_state(s: ElementState) -> MouseButtonState {
    match s {
        ElementState::Pressed => MouseButtonState::Pressed,
        ElementState::Released => MouseButtonState::Released,
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}
