use crate::paint::Rgb;
use crate::render::Renderer;

use super::DrawCmd;

/// Recorded draw stream for one frame, in paint order (back to front).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    clear_color: Rgb,
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new(clear_color: Rgb) -> Self {
        Self { clear_color, items: Vec::new() }
    }

    #[inline]
    pub fn clear_color(&self) -> Rgb {
        self.clear_color
    }

    /// Appends a command. Commands without vertices are dropped.
    pub fn push(&mut self, cmd: DrawCmd) {
        if cmd.is_empty() {
            return;
        }
        self.items.push(cmd);
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the target, then issues every command in paint order.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear(self.clear_color);
        for cmd in &self.items {
            renderer.draw(cmd);
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(Rgb::CLEAR_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::Topology;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, color: Rgb) {
            self.calls.push(format!("clear {:?}", color.to_array()));
        }

        fn draw(&mut self, cmd: &DrawCmd) {
            self.calls.push(format!("{:?} x{}", cmd.topology, cmd.vertices.len()));
        }
    }

    #[test]
    fn push_drops_empty_commands() {
        let mut list = DrawList::default();
        list.push(DrawCmd::empty(Topology::LineLoop, Rgb::BLUE, 1.0));
        assert!(list.is_empty());
    }

    #[test]
    fn replay_clears_then_draws_in_order() {
        let mut list = DrawList::new(Rgb::BLACK);
        list.push(DrawCmd::new(Topology::Lines, vec![Vec2::zero(); 4], Rgb::GRID_GRAY, 1.0));
        list.push(DrawCmd::new(Topology::Points, vec![Vec2::zero()], Rgb::BLUE, 5.0));

        let mut rec = Recorder::default();
        list.replay(&mut rec);

        assert_eq!(rec.calls, vec!["clear [0.0, 0.0, 0.0]", "Lines x4", "Points x1"]);
    }
}
