use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

use primdraw_engine::coords::Viewport;
use primdraw_engine::input::platform::winit::translate_window_event;
use primdraw_engine::input::{map_to_device, PointerState};
use primdraw_engine::scene::Mode;
use primdraw_engine::session::{Command, CommandResult, SessionController};
use primdraw_engine::DomainError;

use crate::canvas::{CanvasRenderer, FrameGeometry};
use crate::controls::{Action, Controls};
use crate::frame_log::LogRenderer;
use crate::gpu::{Gpu, SurfaceErrorAction};

/// Window, surface and pipeline for the single canvas.
struct Canvas {
    window: Arc<Window>,
    gpu: Gpu,
    renderer: CanvasRenderer,
}

/// winit application driving one `SessionController`.
///
/// Pointer events reach the session through the engine's winit adapter, keys
/// through `Controls`. Redraws are requested only when a command reports one.
pub struct StudioApp {
    session: SessionController,
    controls: Controls,
    pointer: PointerState,
    modifiers: ModifiersState,
    frame_log: LogRenderer,
    canvas: Option<Canvas>,
    fatal: Option<anyhow::Error>,
}

impl StudioApp {
    pub fn new(session: SessionController) -> Self {
        Self {
            session,
            controls: Controls::new(),
            pointer: PointerState::default(),
            modifiers: ModifiersState::empty(),
            frame_log: LogRenderer::default(),
            canvas: None,
            fatal: None,
        }
    }

    /// Result of the run: the error that stopped the loop, if any.
    pub fn finish(self) -> Result<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn open_canvas(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let vp = self.session.viewport();
        let attrs = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(LogicalSize::new(vp.width as f64, vp.height as f64));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let gpu = pollster::block_on(Gpu::new(window.clone()))
            .context("GPU initialization failed for window")?;

        // The viewport is tracked in physical pixels from here on.
        let size = gpu.size();
        let viewport = Viewport::new(size.width as f32, size.height as f32);
        let resized = self.session.apply(Command::Resize(viewport));

        self.canvas = Some(Canvas {
            window: window.clone(),
            gpu,
            renderer: CanvasRenderer::new(),
        });
        self.after_command(resized);
        window.request_redraw();
        Ok(())
    }

    fn after_command(&self, result: Result<CommandResult, DomainError>) {
        match result {
            Ok(r) => {
                if r.needs_redraw() {
                    if let Some(c) = &self.canvas {
                        c.window.request_redraw();
                    }
                }
            }
            Err(e) => log::warn!("command rejected: {e}"),
        }
        self.refresh_title();
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let width = self.session.style().line_width();
        match self.controls.on_key(code, self.modifiers.shift_key(), width) {
            Some(Action::Command(cmd)) => {
                let result = self.session.apply(cmd);
                self.after_command(result);
            }
            Some(Action::LogFrame) => match self.session.frame() {
                Ok(list) => list.replay(&mut self.frame_log),
                Err(e) => log::warn!("no frame to log: {e}"),
            },
            Some(Action::Quit) => event_loop.exit(),
            None => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(canvas) = self.canvas.as_mut() else { return };
        let size = canvas.gpu.size();
        if size.width == 0 || size.height == 0 {
            return;
        }

        let list = match self.session.frame() {
            Ok(list) => list,
            Err(e) => {
                log::warn!("skipping frame: {e}");
                return;
            }
        };
        let mut geometry = FrameGeometry::new(self.session.viewport());
        list.replay(&mut geometry);

        match canvas.gpu.begin_frame() {
            Ok(mut frame) => {
                canvas.renderer.render(&canvas.gpu, &mut frame, &geometry);
                canvas.gpu.submit(frame);
            }
            Err(err) => {
                let reason = err.to_string();
                match canvas.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => canvas.window.request_redraw(),
                    SurfaceErrorAction::SkipFrame => log::debug!("frame skipped: {reason}"),
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface error is fatal: {reason}");
                        self.fatal = Some(anyhow!("surface error: {reason}"));
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn title(&self) -> String {
        let mode = match self.session.mode() {
            Mode::Idle => "idle",
            Mode::Drawing => "drawing",
        };
        let grid = self.session.grid();
        let mut title = format!(
            "primdraw | {} | {mode} | grid {}x{} | width {}",
            self.session.primitive(),
            grid.rows(),
            grid.cols(),
            self.session.style().line_width()
        );
        if let Some(p) = self
            .pointer
            .position
            .and_then(|(x, y)| map_to_device(x, y, self.session.viewport()).ok())
        {
            title.push_str(&format!(" | ({:.2}, {:.2})", p.x, p.y));
        }
        title
    }

    fn refresh_title(&self) {
        if let Some(c) = &self.canvas {
            c.window.set_title(&self.title());
        }
    }
}

impl ApplicationHandler for StudioApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() {
            return;
        }
        if let Err(e) = self.open_canvas(event_loop) {
            log::error!("failed to open canvas: {e:#}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.canvas.as_ref().is_none_or(|c| c.window.id() != window_id) {
            return;
        }

        if let Some(ev) = translate_window_event(&self.pointer, &event) {
            self.pointer.apply_event(&ev);
            let result = self.session.handle_input(&ev);
            self.after_command(result);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ModifiersChanged(m) => self.modifiers = m.state(),

            WindowEvent::KeyboardInput { event: key, .. } => {
                if key.state == ElementState::Pressed && !key.repeat {
                    if let PhysicalKey::Code(code) = key.physical_key {
                        self.on_key(event_loop, code);
                    }
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(c) = self.canvas.as_mut() {
                    c.gpu.resize(size);
                    c.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
