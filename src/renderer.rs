use crate::command::CommandLog;
use crate::cursor::CursorPreview;
use crate::element::Element;
use crate::surface::Surface;

/// Redraws a surface from scratch out of the command log.
///
/// Every repaint clears the whole surface and replays every committed
/// drawable, so its cost grows linearly with the recorded points.
#[derive(Debug, Default)]
pub struct Renderer {
    repaints: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear, draw the cursor preview (if any), then the committed drawables
    /// oldest first so later ones end up on top.
    pub fn repaint(
        &mut self,
        surface: &mut dyn Surface,
        cursor: Option<&CursorPreview>,
        log: &CommandLog,
    ) {
        self.repaints += 1;
        log::trace!(
            "Repaint #{}: {} drawables, {} points",
            self.repaints,
            log.len(),
            log.point_count()
        );

        let full = surface.full_rect();
        surface.clear(full);
        if let Some(cursor) = cursor {
            cursor.render(surface);
        }
        Self::compose(surface, log);
    }

    /// Render the committed drawables onto whatever is already on `surface`
    pub fn compose(surface: &mut dyn Surface, log: &CommandLog) {
        for drawable in log.committed() {
            drawable.render(surface);
        }
    }

    /// Number of repaints performed so far
    pub fn repaints(&self) -> u64 {
        self.repaints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Drawable, Stroke, Sticker};
    use crate::surface::{RecordingSurface, SurfaceOp};
    use crate::tool::ToolState;
    use egui::{Color32, Pos2, Rect, Vec2};

    #[test]
    fn test_repaint_order_is_clear_cursor_then_log() {
        let mut log = CommandLog::new();
        let mut stroke = Stroke::new(Pos2::new(1.0, 1.0), 2.0, Color32::BLACK);
        stroke.extend(Pos2::new(9.0, 9.0));
        log.commit(Drawable::Stroke(stroke));
        log.commit(Drawable::Sticker(Sticker::new(
            Pos2::new(50.0, 50.0),
            "☕",
            24.0,
            Color32::BLACK,
        )));

        let tool = ToolState::new(1.0, "⚬", Color32::BLACK);
        let cursor = CursorPreview::new(Pos2::new(20.0, 20.0), &tool);

        let mut surface = RecordingSurface::new(Vec2::splat(256.0));
        let mut renderer = Renderer::new();
        renderer.repaint(&mut surface, Some(&cursor), &log);

        let ops = surface.ops();
        assert_eq!(ops.len(), 4);
        assert_eq!(
            ops[0],
            SurfaceOp::Clear(Rect::from_min_size(Pos2::ZERO, Vec2::splat(256.0)))
        );
        assert!(matches!(&ops[1], SurfaceOp::Text { text, .. } if text == "⚬"));
        assert!(matches!(&ops[2], SurfaceOp::Stroke { points, .. } if points.len() == 2));
        assert!(matches!(&ops[3], SurfaceOp::Text { text, .. } if text == "☕"));
        assert_eq!(renderer.repaints(), 1);
    }

    #[test]
    fn test_repaint_without_cursor_or_drawables_only_clears() {
        let mut surface = RecordingSurface::new(Vec2::splat(64.0));
        Renderer::new().repaint(&mut surface, None, &CommandLog::new());
        assert_eq!(surface.ops().len(), 1);
    }
}
