use crate::paint::Rgb;

/// Stroke settings shared by every primitive.
///
/// `line_width` applies uniformly to point size and line width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderStyle {
    line_width: f32,
    pub color: Rgb,
}

impl RenderStyle {
    pub const DEFAULT_LINE_WIDTH: f32 = 5.0;

    /// Creates a style, falling back to the default width if `line_width` is unusable.
    pub fn new(line_width: f32, color: Rgb) -> Self {
        let mut style = Self { line_width: Self::DEFAULT_LINE_WIDTH, color };
        style.set_line_width(line_width);
        style
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Sets the width if it is positive and finite. Returns whether it was accepted.
    pub fn set_line_width(&mut self, width: f32) -> bool {
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
            true
        } else {
            false
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { line_width: Self::DEFAULT_LINE_WIDTH, color: Rgb::BLUE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_width_is_rejected() {
        let mut s = RenderStyle::default();
        assert!(!s.set_line_width(0.0));
        assert!(!s.set_line_width(-2.0));
        assert!(!s.set_line_width(f32::INFINITY));
        assert_eq!(s.line_width(), RenderStyle::DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn new_falls_back_to_default_width() {
        assert_eq!(RenderStyle::new(f32::NAN, Rgb::BLACK).line_width(), 5.0);
        assert_eq!(RenderStyle::new(2.5, Rgb::BLACK).line_width(), 2.5);
    }
}
