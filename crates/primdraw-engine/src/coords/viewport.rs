use crate::error::DomainError;

/// Viewport size in pixels.
///
/// Pointer positions are interpreted relative to this size, and its aspect
/// ratio drives circle correction in the shape renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns `self` if it has a drawable area.
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(DomainError::EmptyViewport { width: self.width, height: self.height })
        }
    }

    /// Width over height.
    pub fn aspect(self) -> Result<f32, DomainError> {
        let vp = self.validate()?;
        Ok(vp.width / vp.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
