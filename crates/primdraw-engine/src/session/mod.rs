//! Session state and the commands that change it.
//!
//! `SessionController` owns the authoritative scene. Controls and input reach
//! it only as `Command` values; renderers only ever see `SceneState`
//! snapshots.

mod command;
mod controller;

pub use command::{Command, CommandResult};
pub use controller::SessionController;
