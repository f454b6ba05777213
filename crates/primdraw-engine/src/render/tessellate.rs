use std::f32::consts::TAU;

use crate::coords::Vec2;

/// Points per tessellated circle or ellipse outline.
pub const SEGMENTS: usize = 100;

/// Closed outline of a circle through `rim`, scaled on Y by `aspect`.
///
/// `aspect` is viewport width over height. Device coordinates stretch with the
/// window, so scaling the Y term by it keeps the outline round on screen.
pub fn circle_loop(center: Vec2, rim: Vec2, aspect: f32) -> Vec<Vec2> {
    let radius = center.distance(rim);
    outline(center, radius, radius, aspect)
}

/// Closed outline of an "ellipse" through `edge`.
///
/// Both radii are the center-to-edge distance and no aspect correction is
/// applied, so the result is an uncorrected circle. Kept as observed; see
/// DESIGN.md.
pub fn ellipse_loop(center: Vec2, edge: Vec2) -> Vec<Vec2> {
    let radius_x = center.distance(edge);
    let radius_y = radius_x;
    outline(center, radius_x, radius_y, 1.0)
}

fn outline(center: Vec2, radius_x: f32, radius_y: f32, y_scale: f32) -> Vec<Vec2> {
    let step = TAU / SEGMENTS as f32;
    (0..SEGMENTS)
        .map(|i| {
            let theta = i as f32 * step;
            Vec2::new(
                center.x + radius_x * theta.cos(),
                center.y + radius_y * theta.sin() * y_scale,
            )
        })
        .collect()
}
