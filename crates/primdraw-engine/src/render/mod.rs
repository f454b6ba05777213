//! Rendering: turns a `SceneState` into a `DrawList`.
//!
//! The functions here are pure. Issuing actual device draw calls is the job of
//! a `Renderer` implementation supplied by the shell; `triangulate` prepares a
//! command for backends that only rasterize triangles.

mod grid;
mod shape;
mod stroke;
mod tessellate;

use crate::error::DomainError;
use crate::paint::Rgb;
use crate::scene::{DrawCmd, DrawList, SceneState, Topology};

pub use grid::{render_grid, Segment};
pub use shape::render_shape;
pub use stroke::triangulate;
pub use tessellate::{circle_loop, ellipse_loop, SEGMENTS};

/// Rendering collaborator.
///
/// Receives one `clear` per frame followed by the frame's commands in paint order.
pub trait Renderer {
    fn clear(&mut self, color: Rgb);
    fn draw(&mut self, cmd: &DrawCmd);
}

/// Builds the draw stream for one frame: grid first, shape on top.
///
/// Fails if the snapshot's viewport has no area, since circle aspect
/// correction is undefined there.
pub fn build_frame(scene: &SceneState) -> Result<DrawList, DomainError> {
    let aspect = scene.viewport.aspect()?;
    let width = scene.style.line_width();

    let mut list = DrawList::new(scene.clear_color);

    let grid = render_grid(scene.grid.rows(), scene.grid.cols())?;
    let grid_vertices = grid.iter().flat_map(|s| [s.a, s.b]).collect();
    list.push(DrawCmd::new(Topology::Lines, grid_vertices, Rgb::GRID_GRAY, width));

    list.push(render_shape(scene.primitive, &scene.vertices, &scene.style, aspect));

    log::trace!(
        "built frame: {} commands, {} {} vertices",
        list.len(),
        scene.vertices.len(),
        scene.primitive
    );
    Ok(list)
}
