use crate::coords::Vec2;
use crate::scene::{DrawCmd, Primitive, RenderStyle, Topology};

use super::tessellate::{circle_loop, ellipse_loop};

/// Assembles the draw command for `primitive` over `vertices`.
///
/// Never fails. Vertex counts a primitive cannot use degrade to partial or
/// empty output:
/// - `Line` drops a trailing unpaired vertex
/// - `Polygon` passes through any count, including degenerate ones
/// - `Circle` and `Ellipse` draw nothing unless given exactly two vertices
///
/// `aspect` (viewport width over height) only affects `Circle`.
pub fn render_shape(
    primitive: Primitive,
    vertices: &[Vec2],
    style: &RenderStyle,
    aspect: f32,
) -> DrawCmd {
    let color = style.color;
    let width = style.line_width();

    match primitive {
        Primitive::Point => DrawCmd::new(Topology::Points, vertices.to_vec(), color, width),

        Primitive::Line => {
            let paired = vertices.len() - vertices.len() % 2;
            DrawCmd::new(Topology::Lines, vertices[..paired].to_vec(), color, width)
        }

        Primitive::Polygon => DrawCmd::new(Topology::Polygon, vertices.to_vec(), color, width),

        Primitive::Circle => match vertices {
            [center, rim] => {
                DrawCmd::new(Topology::LineLoop, circle_loop(*center, *rim, aspect), color, width)
            }
            _ => DrawCmd::empty(Topology::LineLoop, color, width),
        },

        Primitive::Ellipse => match vertices {
            [center, edge] => {
                DrawCmd::new(Topology::LineLoop, ellipse_loop(*center, *edge), color, width)
            }
            _ => DrawCmd::empty(Topology::LineLoop, color, width),
        },
    }
}
