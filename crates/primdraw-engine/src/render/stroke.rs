use crate::coords::{Vec2, Viewport};
use crate::scene::{DrawCmd, Topology};

/// Expands a draw command into a triangle list in device coordinates.
///
/// GPU backends rasterize points and lines one pixel wide, so widths are
/// realized here: every point becomes a `width`-pixel square and every
/// segment a `width`-pixel band. A polygon with three or more vertices is
/// filled as a fan from its first vertex; with fewer it degrades to a line
/// or a point. Zero-length segments produce nothing.
///
/// `viewport` must be valid; the caller takes it from a built frame.
pub fn triangulate(cmd: &DrawCmd, viewport: Viewport) -> Vec<Vec2> {
    let px = Vec2::new(2.0 / viewport.width, 2.0 / viewport.height);
    let half = cmd.width * 0.5;
    let mut out = Vec::new();

    match cmd.topology {
        Topology::Points => {
            for &p in &cmd.vertices {
                point_quad(&mut out, p, half, px);
            }
        }
        Topology::Polygon if cmd.vertices.len() >= 3 => {
            let v = &cmd.vertices;
            for i in 1..v.len() - 1 {
                out.extend_from_slice(&[v[0], v[i], v[i + 1]]);
            }
        }
        Topology::Polygon if cmd.vertices.len() == 1 => {
            point_quad(&mut out, cmd.vertices[0], half, px);
        }
        Topology::Lines | Topology::LineLoop | Topology::Polygon => {
            for (a, b) in cmd.segments() {
                segment_quad(&mut out, a, b, half, px);
            }
        }
    }
    out
}

fn point_quad(out: &mut Vec<Vec2>, c: Vec2, half: f32, px: Vec2) {
    let dx = half * px.x;
    let dy = half * px.y;
    push_quad(
        out,
        [
            Vec2::new(c.x - dx, c.y - dy),
            Vec2::new(c.x + dx, c.y - dy),
            Vec2::new(c.x + dx, c.y + dy),
            Vec2::new(c.x - dx, c.y + dy),
        ],
    );
}

fn segment_quad(out: &mut Vec<Vec2>, a: Vec2, b: Vec2, half: f32, px: Vec2) {
    // Offset is computed in pixels so the band keeps its width at any aspect.
    let d = b - a;
    let d_px = Vec2::new(d.x / px.x, d.y / px.y);
    let len = d_px.length();
    if len == 0.0 {
        return;
    }
    let n_px = Vec2::new(-d_px.y, d_px.x) * (half / len);
    let n = Vec2::new(n_px.x * px.x, n_px.y * px.y);
    push_quad(out, [a + n, b + n, b - n, a - n]);
}

fn push_quad(out: &mut Vec<Vec2>, [a, b, c, d]: [Vec2; 4]) {
    out.extend_from_slice(&[a, b, c, a, c, d]);
}
