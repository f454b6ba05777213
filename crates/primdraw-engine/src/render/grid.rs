use crate::coords::Vec2;
use crate::error::DomainError;

/// Straight line segment in device coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}

/// Evenly spaced reference grid.
///
/// Vertical lines sit at `i * 2/cols` for `i` in `[-cols, cols]`, horizontal
/// lines at `i * 2/rows` for `i` in `[-rows, rows]`. Lines outside [-1, 1]
/// are emitted too and clipped by the device. Yields `2*cols + 2*rows + 2`
/// segments, verticals first.
pub fn render_grid(rows: u32, cols: u32) -> Result<Vec<Segment>, DomainError> {
    if rows == 0 || cols == 0 {
        return Err(DomainError::ZeroGridDimension { rows, cols });
    }

    let step_x = 2.0 / cols as f32;
    let step_y = 2.0 / rows as f32;
    let (cols, rows) = (cols as i64, rows as i64);

    let mut out = Vec::with_capacity((2 * cols + 2 * rows + 2) as usize);

    for i in -cols..=cols {
        let x = i as f32 * step_x;
        out.push(Segment::new(Vec2::new(x, -1.0), Vec2::new(x, 1.0)));
    }
    for i in -rows..=rows {
        let y = i as f32 * step_y;
        out.push(Segment::new(Vec2::new(-1.0, y), Vec2::new(1.0, y)));
    }

    Ok(out)
}
