//! Keyboard stand-ins for the canvas controls.
//!
//! | key                | control                      |
//! |--------------------|------------------------------|
//! | `1`..`5`           | primitive selector           |
//! | `S` / `E`          | start / end drawing          |
//! | `Up` / `Down`      | add / remove grid row        |
//! | `Right` / `Left`   | add / remove grid column     |
//! | `+` / `-`          | line width up / down         |
//! | `C` / `Shift+C`    | next / previous color        |
//! | `L`                | log the current frame        |
//! | `Esc`              | quit                         |

use winit::keyboard::KeyCode;

use primdraw_engine::paint::Rgb;
use primdraw_engine::scene::Primitive;
use primdraw_engine::session::Command;

/// What a key press asks the shell to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Command(Command),
    LogFrame,
    Quit,
}

/// Line width never goes below this through the keyboard.
const MIN_WIDTH: f32 = 1.0;

/// Colors the color control cycles through, starting from the session default.
const PALETTE: [Rgb; 6] = [
    Rgb::BLUE,
    Rgb::BLACK,
    Rgb::DARK_RED,
    Rgb::GREEN,
    Rgb::ORANGE,
    Rgb::GRID_GRAY,
];

#[derive(Debug, Default)]
pub struct Controls {
    palette_index: usize,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a key press to an action. `line_width` is the session's current
    /// width, needed to step it.
    pub fn on_key(&mut self, code: KeyCode, shift: bool, line_width: f32) -> Option<Action> {
        let cmd = match code {
            KeyCode::Digit1 => Command::SelectPrimitive(Primitive::ALL[0]),
            KeyCode::Digit2 => Command::SelectPrimitive(Primitive::ALL[1]),
            KeyCode::Digit3 => Command::SelectPrimitive(Primitive::ALL[2]),
            KeyCode::Digit4 => Command::SelectPrimitive(Primitive::ALL[3]),
            KeyCode::Digit5 => Command::SelectPrimitive(Primitive::ALL[4]),

            KeyCode::KeyS => Command::StartDrawing,
            KeyCode::KeyE => Command::StopDrawing,

            KeyCode::ArrowUp => Command::AddRow,
            KeyCode::ArrowDown => Command::RemoveRow,
            KeyCode::ArrowRight => Command::AddColumn,
            KeyCode::ArrowLeft => Command::RemoveColumn,

            KeyCode::Equal | KeyCode::NumpadAdd => Command::SetLineWidth(line_width + 1.0),
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                Command::SetLineWidth((line_width - 1.0).max(MIN_WIDTH))
            }

            KeyCode::KeyC => Command::SetColor(self.step_color(shift)),

            KeyCode::KeyL => return Some(Action::LogFrame),
            KeyCode::Escape => return Some(Action::Quit),
            _ => return None,
        };
        Some(Action::Command(cmd))
    }

    fn step_color(&mut self, backwards: bool) -> Rgb {
        let n = PALETTE.len();
        self.palette_index = if backwards {
            (self.palette_index + n - 1) % n
        } else {
            (self.palette_index + 1) % n
        };
        PALETTE[self.palette_index]
    }
}
