//! Input subsystem.
//!
//! Public API is platform-agnostic. `platform::winit` translates native window
//! events into `InputEvent`s; `translate` turns those into session `Command`s,
//! and `map_to_device` converts pixel positions into normalized device
//! coordinates.

mod bindings;
mod mapper;
pub mod platform;
mod state;
mod types;

pub use bindings::translate;
pub use mapper::map_to_device;
pub use state::PointerState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
