use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Last known pointer position over the canvas, in pixels.
///
/// Native button events carry no position on most platforms, so the shell
/// feeds every translated event through here and stamps presses with the
/// tracked position.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PointerState {
    pub position: Option<(f32, f32)>,
}

impl PointerState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.position = Some((*x, *y));
            }
            InputEvent::PointerLeft => self.position = None,
            InputEvent::Resized { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_moves_and_forgets_on_leave() {
        let mut s = PointerState::default();
        assert_eq!(s.position, None);

        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(s.position, Some((3.0, 4.0)));

        s.apply_event(&InputEvent::Resized { width: 10.0, height: 10.0 });
        assert_eq!(s.position, Some((3.0, 4.0)));

        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.position, None);
    }

    #[test]
    fn button_events_update_position() {
        let mut s = PointerState::default();
        s.apply_event(&InputEvent::PointerButton(PointerButtonEvent::left_press(7.0, 8.0)));
        assert_eq!(s.position, Some((7.0, 8.0)));
    }
}
