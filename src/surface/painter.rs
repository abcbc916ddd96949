use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::{PathBuilder, Surface};

/// Background the on-screen canvas is cleared to
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Paints into an egui [`Painter`], translating canvas coordinates by the
/// screen position of the canvas.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
    path: PathBuilder,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            canvas_rect,
            path: PathBuilder::default(),
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.canvas_rect.min + point.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.canvas_rect.size()
    }

    fn clear(&mut self, region: Rect) {
        let screen = region.translate(self.canvas_rect.min.to_vec2());
        self.painter
            .rect_filled(screen.intersect(self.canvas_rect), 0.0, CANVAS_BACKGROUND);
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        for subpath in self.path.take() {
            if subpath.len() < 2 {
                continue;
            }
            let points = subpath.into_iter().map(|p| self.to_screen(p)).collect();
            self.painter
                .add(Shape::line(points, EguiStroke::new(width, color)));
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(anchor),
            Align2::LEFT_BOTTOM,
            text,
            FontId::monospace(font_size),
            color,
        );
    }
}
