use crate::config::SessionConfig;
use crate::coords::{Vec2, Viewport};
use crate::error::DomainError;
use crate::input::{self, InputEvent};
use crate::render;
use crate::scene::{DrawList, GridSpec, Mode, Primitive, RenderStyle, SceneState};

use super::{Command, CommandResult};

/// Owns the scene for one canvas and applies commands to it.
///
/// State machine: `Idle` ignores pointer presses; `Drawing` maps each press
/// into device coordinates and appends it. Entering `Drawing` clears the
/// vertices, leaving it does not. Switching primitive never touches the
/// vertices.
#[derive(Debug, Clone)]
pub struct SessionController {
    state: SceneState,
}

impl SessionController {
    pub fn new(config: SessionConfig) -> Result<Self, DomainError> {
        let state = config.into_scene()?;
        log::debug!(
            "session created: {} on {}x{} grid, viewport {}x{}",
            state.primitive,
            state.grid.rows(),
            state.grid.cols(),
            state.viewport.width,
            state.viewport.height
        );
        Ok(Self { state })
    }

    /// Applies a command.
    ///
    /// Errors leave the state untouched.
    pub fn apply(&mut self, cmd: Command) -> Result<CommandResult, DomainError> {
        let result = match cmd {
            Command::SelectPrimitive(p) => self.select_primitive(p),
            Command::StartDrawing => self.start_drawing(),
            Command::StopDrawing => self.stop_drawing(),
            Command::AddRow => {
                self.state.grid.add_row();
                self.log_grid();
                CommandResult::Redraw
            }
            Command::AddColumn => {
                self.state.grid.add_col();
                self.log_grid();
                CommandResult::Redraw
            }
            Command::RemoveRow => {
                let changed = self.state.grid.remove_row();
                self.log_grid();
                changed.into()
            }
            Command::RemoveColumn => {
                let changed = self.state.grid.remove_col();
                self.log_grid();
                changed.into()
            }
            Command::SetLineWidth(w) => self.set_line_width(w),
            Command::SetColor(c) => {
                let changed = self.state.style.color != c;
                self.state.style.color = c;
                log::debug!("shape color set to {:?}", c.to_array());
                changed.into()
            }
            Command::PointerPressed { x, y } => self.pointer_pressed(x, y)?,
            Command::Resize(vp) => self.resize(vp)?,
        };
        Ok(result)
    }

    /// Translates `event` and applies the resulting command, if any.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<CommandResult, DomainError> {
        match input::translate(event) {
            Some(cmd) => self.apply(cmd),
            None => Ok(CommandResult::Unchanged),
        }
    }

    /// Immutable copy of the current scene, for rendering.
    pub fn snapshot(&self) -> SceneState {
        self.state.clone()
    }

    /// Builds the draw stream for the current scene.
    pub fn frame(&self) -> Result<DrawList, DomainError> {
        render::build_frame(&self.state)
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[inline]
    pub fn primitive(&self) -> Primitive {
        self.state.primitive
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.state.vertices
    }

    #[inline]
    pub fn grid(&self) -> GridSpec {
        self.state.grid
    }

    #[inline]
    pub fn style(&self) -> RenderStyle {
        self.state.style
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    // ── transitions ───────────────────────────────────────────────────────

    fn select_primitive(&mut self, p: Primitive) -> CommandResult {
        if self.state.primitive == p {
            return CommandResult::Unchanged;
        }
        log::debug!(
            "primitive {} -> {} ({} vertices kept)",
            self.state.primitive,
            p,
            self.state.vertices.len()
        );
        self.state.primitive = p;
        CommandResult::Redraw
    }

    fn start_drawing(&mut self) -> CommandResult {
        log::debug!(
            "drawing started, discarding {} vertices",
            self.state.vertices.len()
        );
        self.state.mode = Mode::Drawing;
        self.state.vertices.clear();
        CommandResult::Redraw
    }

    fn stop_drawing(&mut self) -> CommandResult {
        if self.state.mode == Mode::Drawing {
            log::debug!("drawing stopped with {} vertices", self.state.vertices.len());
        }
        self.state.mode = Mode::Idle;
        CommandResult::Unchanged
    }

    fn set_line_width(&mut self, width: f32) -> CommandResult {
        let before = self.state.style.line_width();
        if !self.state.style.set_line_width(width) {
            log::warn!("ignoring line width {width}; must be positive and finite");
            return CommandResult::Unchanged;
        }
        log::debug!("line width {before} -> {width}");
        (before != width).into()
    }

    fn pointer_pressed(&mut self, x: f32, y: f32) -> Result<CommandResult, DomainError> {
        if self.state.mode != Mode::Drawing {
            log::trace!("pointer press at ({x}, {y}) ignored while idle");
            return Ok(CommandResult::Unchanged);
        }
        let p = input::map_to_device(x, y, self.state.viewport)?;
        if !p.is_finite() {
            log::warn!("ignoring pointer press at non-finite pixel ({x}, {y})");
            return Ok(CommandResult::Unchanged);
        }
        self.state.vertices.push(p);
        log::debug!(
            "vertex #{} at ({:.3}, {:.3}) from pixel ({x}, {y})",
            self.state.vertices.len(),
            p.x,
            p.y
        );
        Ok(CommandResult::Redraw)
    }

    fn resize(&mut self, viewport: Viewport) -> Result<CommandResult, DomainError> {
        let vp = viewport.validate()?;
        if vp == self.state.viewport {
            return Ok(CommandResult::Unchanged);
        }
        log::debug!("viewport resized to {}x{}", vp.width, vp.height);
        self.state.viewport = vp;
        Ok(CommandResult::Redraw)
    }

    fn log_grid(&self) {
        log::debug!("grid now {}x{}", self.state.grid.rows(), self.state.grid.cols());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButtonEvent;
    use crate::paint::Rgb;
    use crate::scene::Topology;

    fn session() -> SessionController {
        SessionController::new(SessionConfig::default().with_viewport(800.0, 600.0)).unwrap()
    }

    fn press(s: &mut SessionController, x: f32, y: f32) -> CommandResult {
        s.apply(Command::PointerPressed { x, y }).unwrap()
    }

    // ── drawing mode ──────────────────────────────────────────────────────

    #[test]
    fn starts_idle_and_ignores_pointer() {
        let mut s = session();
        assert_eq!(s.mode(), Mode::Idle);
        assert_eq!(press(&mut s, 10.0, 10.0), CommandResult::Unchanged);
        assert!(s.vertices().is_empty());
    }

    #[test]
    fn drawing_appends_mapped_vertices() {
        let mut s = session();
        s.apply(Command::StartDrawing).unwrap();
        assert_eq!(press(&mut s, 0.0, 0.0), CommandResult::Redraw);
        press(&mut s, 400.0, 300.0);
        assert_eq!(s.vertices(), &[Vec2::new(-1.0, 1.0), Vec2::new(0.0, 0.0)]);
    }

    #[test]
    fn stopping_keeps_vertices_until_next_start() {
        let mut s = session();
        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 100.0, 100.0);
        press(&mut s, 200.0, 200.0);

        s.apply(Command::StopDrawing).unwrap();
        assert_eq!(s.mode(), Mode::Idle);
        assert_eq!(s.vertices().len(), 2);
        press(&mut s, 300.0, 300.0);
        assert_eq!(s.vertices().len(), 2);

        s.apply(Command::StartDrawing).unwrap();
        assert_eq!(s.mode(), Mode::Drawing);
        assert!(s.vertices().is_empty());
    }

    #[test]
    fn restarting_while_drawing_clears_again() {
        let mut s = session();
        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 1.0, 1.0);
        s.apply(Command::StartDrawing).unwrap();
        assert!(s.vertices().is_empty());
    }

    #[test]
    fn primitive_switch_keeps_vertices() {
        let mut s = session();
        s.apply(Command::StartDrawing).unwrap();
        for i in 0..4 {
            press(&mut s, 100.0 * i as f32, 50.0);
        }
        assert_eq!(s.apply(Command::SelectPrimitive(Primitive::Circle)), Ok(CommandResult::Redraw));
        assert_eq!(s.vertices().len(), 4);
        assert_eq!(s.apply(Command::SelectPrimitive(Primitive::Circle)), Ok(CommandResult::Unchanged));

        // Four vertices: the circle draws nothing, only the grid remains.
        assert_eq!(s.frame().unwrap().len(), 1);
    }

    #[test]
    fn non_finite_press_adds_no_vertex() {
        let mut s = session();
        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 400.0, 300.0);
        assert_eq!(press(&mut s, f32::NAN, 10.0), CommandResult::Unchanged);
        assert_eq!(press(&mut s, 10.0, f32::INFINITY), CommandResult::Unchanged);
        assert_eq!(press(&mut s, f32::NEG_INFINITY, f32::NAN), CommandResult::Unchanged);
        assert_eq!(s.vertices(), &[Vec2::new(0.0, 0.0)]);
    }

    // ── grid / style ──────────────────────────────────────────────────────

    #[test]
    fn grid_never_drops_below_one() {
        let mut s = session();
        assert_eq!(s.apply(Command::RemoveRow), Ok(CommandResult::Unchanged));
        assert_eq!(s.apply(Command::RemoveColumn), Ok(CommandResult::Unchanged));
        s.apply(Command::AddRow).unwrap();
        s.apply(Command::AddColumn).unwrap();
        s.apply(Command::AddColumn).unwrap();
        for _ in 0..5 {
            s.apply(Command::RemoveRow).unwrap();
            s.apply(Command::RemoveColumn).unwrap();
        }
        assert_eq!((s.grid().rows(), s.grid().cols()), (1, 1));
    }

    #[test]
    fn invalid_line_width_is_ignored() {
        let mut s = session();
        assert_eq!(s.apply(Command::SetLineWidth(-1.0)), Ok(CommandResult::Unchanged));
        assert_eq!(s.style().line_width(), 5.0);
        assert_eq!(s.apply(Command::SetLineWidth(2.0)), Ok(CommandResult::Redraw));
        assert_eq!(s.style().line_width(), 2.0);
    }

    #[test]
    fn color_reaches_shape_command() {
        let mut s = session();
        let red = Rgb::from_u8(255, 0, 0);
        s.apply(Command::SetColor(red)).unwrap();
        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 400.0, 300.0);

        let frame = s.frame().unwrap();
        let shape = &frame.items()[1];
        assert_eq!(shape.topology, Topology::Points);
        assert_eq!(shape.color, red);
    }

    #[test]
    fn out_of_range_color_is_clamped_before_it_is_stored() {
        let mut s = session();
        s.apply(Command::SetColor(Rgb::new(2.0, -1.0, 0.5))).unwrap();
        assert_eq!(s.style().color.to_array(), [1.0, 0.0, 0.5]);

        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 1.0, 1.0);
        let frame = s.frame().unwrap();
        assert!(frame.items()[1].color.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    // ── viewport ──────────────────────────────────────────────────────────

    #[test]
    fn resize_changes_mapping_and_aspect() {
        let mut s = session();
        s.apply(Command::Resize(Viewport::new(400.0, 200.0))).unwrap();
        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 200.0, 100.0);
        assert_eq!(s.vertices(), &[Vec2::new(0.0, 0.0)]);
        assert_eq!(s.snapshot().viewport.aspect(), Ok(2.0));
    }

    #[test]
    fn empty_resize_is_rejected_and_state_kept() {
        let mut s = session();
        assert_eq!(
            s.apply(Command::Resize(Viewport::new(0.0, 10.0))),
            Err(DomainError::EmptyViewport { width: 0.0, height: 10.0 })
        );
        assert_eq!(s.viewport(), Viewport::new(800.0, 600.0));
    }

    // ── input events ──────────────────────────────────────────────────────

    #[test]
    fn input_events_drive_the_session() {
        let mut s = session();
        s.apply(Command::SelectPrimitive(Primitive::Circle)).unwrap();
        s.apply(Command::StartDrawing).unwrap();
        s.handle_input(&InputEvent::PointerButton(PointerButtonEvent::left_press(400.0, 300.0)))
            .unwrap();
        s.handle_input(&InputEvent::PointerButton(PointerButtonEvent::left_press(600.0, 300.0)))
            .unwrap();
        assert_eq!(s.handle_input(&InputEvent::PointerLeft), Ok(CommandResult::Unchanged));

        let frame = s.frame().unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.items()[1].topology, Topology::LineLoop);
        assert_eq!(frame.items()[1].vertices.len(), render::SEGMENTS);
    }

    #[test]
    fn snapshot_is_detached_from_later_commands() {
        let mut s = session();
        s.apply(Command::StartDrawing).unwrap();
        press(&mut s, 10.0, 10.0);
        let snap = s.snapshot();
        press(&mut s, 20.0, 20.0);
        assert_eq!(snap.vertices.len(), 1);
        assert_eq!(s.vertices().len(), 2);
    }
}
