/// Flat RGB color with channels in `[0, 1]`.
///
/// Fields are private so every value goes through a clamping constructor.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
}

impl Rgb {
    /// Neutral gray used for the reference grid.
    pub const GRID_GRAY: Rgb = Rgb { r: 0.7, g: 0.7, b: 0.7 };
    /// Canvas background.
    pub const CLEAR_GRAY: Rgb = Rgb { r: 0.95, g: 0.95, b: 0.95 };
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const BLUE: Rgb = Rgb { r: 0.0, g: 0.0, b: 1.0 };
    pub const DARK_RED: Rgb = Rgb { r: 0.75, g: 0.1, b: 0.1 };
    pub const GREEN: Rgb = Rgb { r: 0.1, g: 0.6, b: 0.2 };
    pub const ORANGE: Rgb = Rgb { r: 0.95, g: 0.55, b: 0.0 };

    /// Creates a color, clamping every channel into `[0, 1]`.
    ///
    /// NaN channels become 0.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r: unit(r), g: unit(g), b: unit(b) }
    }

    /// Creates a color from 8-bit channels, as handed out by color pickers.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range_channels() {
        assert_eq!(Rgb::new(-0.5, 0.5, 1.5), Rgb { r: 0.0, g: 0.5, b: 1.0 });
    }

    #[test]
    fn new_maps_nan_to_zero() {
        assert_eq!(Rgb::new(f32::NAN, 1.0, 1.0).r, 0.0);
    }

    #[test]
    fn from_u8_spans_unit_range() {
        assert_eq!(Rgb::from_u8(0, 255, 0), Rgb { r: 0.0, g: 1.0, b: 0.0 });
        assert_eq!(Rgb::from_u8(255, 0, 0).to_array(), [1.0, 0.0, 0.0]);
    }
}
