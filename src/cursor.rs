use egui::{Color32, Pos2, Vec2};

use crate::surface::Surface;
use crate::tool::ToolState;

/// Transient glyph following the pointer while it is over the canvas.
///
/// Never recorded in the command log.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPreview {
    position: Pos2,
    glyph: String,
    size: f32,
    color: Color32,
}

impl CursorPreview {
    pub fn new(position: Pos2, tool: &ToolState) -> Self {
        Self {
            position,
            glyph: tool.glyph().to_owned(),
            size: Self::size_for(tool.thickness()),
            color: tool.color(),
        }
    }

    /// Preview font size for a marker thickness
    pub fn size_for(thickness: f32) -> f32 {
        thickness * 3.0 + 10.0
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    /// Pick up the latest glyph, size and color from the tool
    pub fn sync_tool(&mut self, tool: &ToolState) {
        self.glyph = tool.glyph().to_owned();
        self.size = Self::size_for(tool.thickness());
        self.color = tool.color();
    }

    /// The glyph is shifted so it sits roughly centered on the pointer
    pub fn render(&self, surface: &mut dyn Surface) {
        let offset = Vec2::new(-self.size / 4.0, self.size / 4.0);
        surface.fill_text(&self.glyph, self.position + offset, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_preview_size_and_offset() {
        let tool = ToolState::new(2.0, "🍩", Color32::BLACK);
        let cursor = CursorPreview::new(Pos2::new(100.0, 100.0), &tool);
        assert_eq!(cursor.size(), 16.0);

        let mut surface = RecordingSurface::new(Vec2::splat(256.0));
        cursor.render(&mut surface);
        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Text {
                text: "🍩".to_owned(),
                anchor: Pos2::new(96.0, 104.0),
                font_size: 16.0,
                color: Color32::BLACK,
            }]
        );
    }

    #[test]
    fn test_sync_tool() {
        let mut tool = ToolState::new(1.0, "⚬", Color32::BLACK);
        let mut cursor = CursorPreview::new(Pos2::ZERO, &tool);
        assert_eq!(cursor.size(), 13.0);

        tool.set_stamp("☕", 2.0);
        cursor.sync_tool(&tool);
        assert_eq!(cursor.glyph(), "☕");
        assert_eq!(cursor.size(), 16.0);
    }
}
