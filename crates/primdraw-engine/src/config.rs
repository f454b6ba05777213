//! Session configuration.
//!
//! Defaults mirror the canvas as it first appears: point mode on a 1x1 grid,
//! 5px blue strokes over a light gray background, 800x600 pixels.

use crate::coords::Viewport;
use crate::error::DomainError;
use crate::paint::Rgb;
use crate::scene::{GridSpec, Mode, Primitive, RenderStyle, SceneState};

/// Initial settings for a `SessionController`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub primitive: Primitive,
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub line_width: f32,
    pub color: Rgb,
    pub clear_color: Rgb,
    pub viewport: Viewport,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            primitive: Primitive::Point,
            grid_rows: 1,
            grid_cols: 1,
            line_width: RenderStyle::DEFAULT_LINE_WIDTH,
            color: Rgb::BLUE,
            clear_color: Rgb::CLEAR_GRAY,
            viewport: Viewport::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_clear_color(mut self, color: Rgb) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    /// Checks the grid and viewport preconditions.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.checked_geometry().map(|_| ())
    }

    fn checked_geometry(&self) -> Result<(GridSpec, Viewport), DomainError> {
        Ok((
            GridSpec::new(self.grid_rows, self.grid_cols)?,
            self.viewport.validate()?,
        ))
    }

    /// Builds the initial scene. An unusable line width falls back to the default.
    pub(crate) fn into_scene(self) -> Result<SceneState, DomainError> {
        let (grid, viewport) = self.checked_geometry()?;

        let style = RenderStyle::new(self.line_width, self.color);
        if style.line_width() != self.line_width {
            log::warn!(
                "line width {} is not positive, using {}",
                self.line_width,
                style.line_width()
            );
        }

        Ok(SceneState {
            primitive: self.primitive,
            vertices: Vec::new(),
            grid,
            style,
            viewport,
            clear_color: self.clear_color,
            mode: Mode::Idle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        let scene = cfg.into_scene().unwrap();
        assert_eq!(scene.grid, GridSpec::default());
        assert_eq!(scene.style.color, Rgb::BLUE);
        assert_eq!(scene.style.line_width(), 5.0);
        assert_eq!(scene.mode, Mode::Idle);
    }

    #[test]
    fn zero_grid_is_rejected() {
        let cfg = SessionConfig::default().with_grid(0, 4);
        assert_eq!(cfg.validate(), Err(DomainError::ZeroGridDimension { rows: 0, cols: 4 }));
        assert!(cfg.into_scene().is_err());
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let cfg = SessionConfig::default().with_viewport(640.0, 0.0);
        assert_eq!(
            cfg.validate(),
            Err(DomainError::EmptyViewport { width: 640.0, height: 0.0 })
        );
    }

    #[test]
    fn validate_and_into_scene_report_the_same_error() {
        for cfg in [
            SessionConfig::default().with_grid(3, 0),
            SessionConfig::default().with_viewport(-1.0, 600.0),
            SessionConfig::default().with_grid(0, 0).with_viewport(0.0, 0.0),
        ] {
            let expected = cfg.validate().unwrap_err();
            assert_eq!(cfg.into_scene().map(|_| ()), Err(expected));
        }
    }

    #[test]
    fn builder_settings_reach_the_scene() {
        let scene = SessionConfig::default()
            .with_primitive(Primitive::Polygon)
            .with_grid(4, 3)
            .with_line_width(1.5)
            .with_color(Rgb::BLACK)
            .with_clear_color(Rgb::new(1.0, 1.0, 1.0))
            .into_scene()
            .unwrap();
        assert_eq!(scene.primitive, Primitive::Polygon);
        assert_eq!((scene.grid.rows(), scene.grid.cols()), (4, 3));
        assert_eq!(scene.style.line_width(), 1.5);
        assert_eq!(scene.style.color, Rgb::BLACK);
        assert_eq!(scene.clear_color, Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn bad_line_width_falls_back() {
        let scene = SessionConfig::default().with_line_width(0.0).into_scene().unwrap();
        assert_eq!(scene.style.line_width(), RenderStyle::DEFAULT_LINE_WIDTH);
    }
}
