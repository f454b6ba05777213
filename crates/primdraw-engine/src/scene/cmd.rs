use crate::coords::Vec2;
use crate::paint::Rgb;

/// How a renderer connects the vertices of a `DrawCmd`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Each vertex is a standalone point.
    Points,
    /// Vertices `2i` and `2i + 1` form a segment.
    Lines,
    /// Consecutive vertices are joined and the last joins the first.
    LineLoop,
    /// One filled polygon over all vertices.
    Polygon,
}

/// Renderer-agnostic draw call: topology, vertex stream, flat color and width.
///
/// `width` is used as point size for `Topology::Points` and line width otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub topology: Topology,
    pub vertices: Vec<Vec2>,
    pub color: Rgb,
    pub width: f32,
}

impl DrawCmd {
    #[inline]
    pub fn new(topology: Topology, vertices: Vec<Vec2>, color: Rgb, width: f32) -> Self {
        Self { topology, vertices, color, width }
    }

    /// A command that draws nothing.
    #[inline]
    pub fn empty(topology: Topology, color: Rgb, width: f32) -> Self {
        Self::new(topology, Vec::new(), color, width)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of line segments the command rasterizes as.
    ///
    /// Points contribute none. A loop or polygon needs two vertices to form
    /// any edge; with exactly two the edge is traversed both ways.
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        match self.topology {
            Topology::Points => 0,
            Topology::Lines => n / 2,
            Topology::LineLoop | Topology::Polygon => {
                if n >= 2 { n } else { 0 }
            }
        }
    }

    /// Segments as vertex pairs, in rasterization order.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        let v = &self.vertices;
        match self.topology {
            Topology::Points => Vec::new(),
            Topology::Lines => v.chunks_exact(2).map(|p| (p[0], p[1])).collect(),
            Topology::LineLoop | Topology::Polygon => {
                if v.len() < 2 {
                    return Vec::new();
                }
                (0..v.len()).map(|i| (v[i], v[(i + 1) % v.len()])).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(topology: Topology, n: usize) -> DrawCmd {
        let vertices = (0..n).map(|i| Vec2::new(i as f32, 0.0)).collect();
        DrawCmd::new(topology, vertices, Rgb::BLACK, 1.0)
    }

    #[test]
    fn segment_count_per_topology() {
        assert_eq!(cmd(Topology::Points, 5).segment_count(), 0);
        assert_eq!(cmd(Topology::Lines, 5).segment_count(), 2);
        assert_eq!(cmd(Topology::LineLoop, 4).segment_count(), 4);
        assert_eq!(cmd(Topology::Polygon, 1).segment_count(), 0);
    }

    #[test]
    fn loop_segments_close_back_to_first_vertex() {
        let c = cmd(Topology::LineLoop, 3);
        let segs = c.segments();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2], (c.vertices[2], c.vertices[0]));
    }

    #[test]
    fn segments_agree_with_segment_count() {
        for t in [Topology::Points, Topology::Lines, Topology::LineLoop, Topology::Polygon] {
            for n in 0..6 {
                let c = cmd(t, n);
                assert_eq!(c.segments().len(), c.segment_count(), "{t:?} with {n} vertices");
            }
        }
    }
}
