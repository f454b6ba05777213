use crate::coords::Viewport;
use crate::session::Command;

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Translates an input event into the session command it triggers.
///
/// Only primary-button presses place vertices; resizes update the viewport.
/// Returns `None` for everything else.
pub fn translate(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            ..
        }) => Some(Command::PointerPressed { x: *x, y: *y }),

        InputEvent::Resized { width, height } => {
            Some(Command::Resize(Viewport::new(*width, *height)))
        }

        InputEvent::PointerButton(_) | InputEvent::PointerMoved(_) | InputEvent::PointerLeft => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerMoveEvent;

    #[test]
    fn left_press_becomes_pointer_command() {
        let ev = InputEvent::PointerButton(PointerButtonEvent::left_press(12.0, 34.0));
        assert_eq!(translate(&ev), Some(Command::PointerPressed { x: 12.0, y: 34.0 }));
    }

    #[test]
    fn release_and_other_buttons_are_ignored() {
        let release = InputEvent::PointerButton(PointerButtonEvent {
            state: MouseButtonState::Released,
            ..PointerButtonEvent::left_press(1.0, 1.0)
        });
        let right = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            ..PointerButtonEvent::left_press(1.0, 1.0)
        });
        assert_eq!(translate(&release), None);
        assert_eq!(translate(&right), None);
    }

    #[test]
    fn moves_and_leave_are_ignored() {
        assert_eq!(translate(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 1.0 })), None);
        assert_eq!(translate(&InputEvent::PointerLeft), None);
    }

    #[test]
    fn resize_becomes_viewport_command() {
        let ev = InputEvent::Resized { width: 1024.0, height: 768.0 };
        assert_eq!(translate(&ev), Some(Command::Resize(Viewport::new(1024.0, 768.0))));
    }
}
