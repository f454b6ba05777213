use crate::coords::{Vec2, Viewport};
use crate::error::DomainError;

/// Maps a pixel position inside `viewport` to normalized device coordinates.
///
/// `(0, 0)` (top-left) maps to `(-1, 1)`, `(width, height)` to `(1, -1)`.
/// The Y axis flips: pixel rows grow downward, device Y grows upward.
/// Positions outside the viewport map outside [-1, 1] unchanged.
pub fn map_to_device(pixel_x: f32, pixel_y: f32, viewport: Viewport) -> Result<Vec2, DomainError> {
    let vp = viewport.validate()?;
    Ok(Vec2::new(
        (pixel_x / vp.width) * 2.0 - 1.0,
        1.0 - (pixel_y / vp.height) * 2.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn corners_and_center() {
        assert_eq!(map_to_device(0.0, 0.0, vp()), Ok(Vec2::new(-1.0, 1.0)));
        assert_eq!(map_to_device(800.0, 600.0, vp()), Ok(Vec2::new(1.0, -1.0)));
        assert_eq!(map_to_device(400.0, 300.0, vp()), Ok(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn y_axis_is_flipped() {
        let top = map_to_device(400.0, 150.0, vp()).unwrap();
        let bottom = map_to_device(400.0, 450.0, vp()).unwrap();
        assert_eq!(top.y, 0.5);
        assert_eq!(bottom.y, -0.5);
    }

    #[test]
    fn corners_hold_for_odd_viewports() {
        let odd = Viewport::new(333.0, 77.0);
        assert_eq!(map_to_device(0.0, 0.0, odd), Ok(Vec2::new(-1.0, 1.0)));
        assert_eq!(map_to_device(333.0, 77.0, odd), Ok(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn zero_sized_viewport_is_a_domain_error() {
        assert_eq!(
            map_to_device(10.0, 10.0, Viewport::new(0.0, 600.0)),
            Err(DomainError::EmptyViewport { width: 0.0, height: 600.0 })
        );
    }
}
