use primdraw_engine::paint::Rgb;
use primdraw_engine::render::Renderer;
use primdraw_engine::scene::DrawCmd;

/// Renderer that writes draw calls to the log instead of a device.
#[derive(Default)]
pub struct LogRenderer {
    frame: u64,
}

impl Renderer for LogRenderer {
    fn clear(&mut self, color: Rgb) {
        self.frame += 1;
        log::info!("frame {}: clear {:?}", self.frame, color.to_array());
    }

    fn draw(&mut self, cmd: &DrawCmd) {
        let first = cmd.vertices.first().map(|v| (v.x, v.y));
        log::info!(
            "  {:?}: {} vertices, {} segments, color {:?}, width {}, first {:?}",
            cmd.topology,
            cmd.vertices.len(),
            cmd.segment_count(),
            cmd.color.to_array(),
            cmd.width,
            first
        );
    }
}
