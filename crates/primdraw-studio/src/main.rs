//! Interactive primdraw canvas.
//!
//! Opens one window and draws the session's frame with wgpu. Clicks place
//! vertices while drawing; the canvas controls are bound to keys (see
//! `controls`). Run with `RUST_LOG=debug` to see the session transitions.

mod app;
mod canvas;
mod controls;
mod frame_log;
mod gpu;

use anyhow::Context;
use winit::event_loop::{ControlFlow, EventLoop};

use primdraw_engine::config::SessionConfig;
use primdraw_engine::logging::{init_logging, LoggingConfig};
use primdraw_engine::session::SessionController;

use crate::app::StudioApp;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let session = SessionController::new(SessionConfig::default())
        .context("invalid session configuration")?;

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = StudioApp::new(session);
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    app.finish()
}
