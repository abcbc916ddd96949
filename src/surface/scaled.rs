use egui::{Color32, Pos2, Rect, Vec2};

use super::Surface;

/// Uniform scale about the origin in front of another surface.
///
/// Positions, line widths and font sizes are all multiplied by the factor,
/// so whatever is rendered through it keeps its proportions.
pub struct ScaledSurface<'a, S: Surface + ?Sized> {
    inner: &'a mut S,
    scale: f32,
}

impl<'a, S: Surface + ?Sized> ScaledSurface<'a, S> {
    pub fn new(inner: &'a mut S, scale: f32) -> Self {
        Self { inner, scale }
    }

    fn map(&self, point: Pos2) -> Pos2 {
        Pos2::new(point.x * self.scale, point.y * self.scale)
    }
}

impl<S: Surface + ?Sized> Surface for ScaledSurface<'_, S> {
    /// Size in unscaled units
    fn size(&self) -> Vec2 {
        self.inner.size() / self.scale
    }

    fn clear(&mut self, region: Rect) {
        let region = Rect::from_min_max(self.map(region.min), self.map(region.max));
        self.inner.clear(region);
    }

    fn move_to(&mut self, point: Pos2) {
        let point = self.map(point);
        self.inner.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        let point = self.map(point);
        self.inner.line_to(point);
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        self.inner.stroke(width * self.scale, color);
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        let anchor = self.map(anchor);
        self.inner.fill_text(text, anchor, font_size * self.scale, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_scales_geometry_and_width() {
        let mut recorder = RecordingSurface::new(Vec2::new(400.0, 400.0));
        {
            let mut scaled = ScaledSurface::new(&mut recorder, 4.0);
            assert_eq!(scaled.size(), Vec2::new(100.0, 100.0));
            scaled.move_to(Pos2::new(1.0, 2.0));
            scaled.line_to(Pos2::new(10.0, 20.0));
            scaled.stroke(3.0, Color32::BLACK);
            scaled.fill_text("x", Pos2::new(5.0, 5.0), 24.0, Color32::BLACK);
        }

        assert_eq!(
            recorder.ops(),
            &[
                SurfaceOp::Stroke {
                    points: vec![Pos2::new(4.0, 8.0), Pos2::new(40.0, 80.0)],
                    width: 12.0,
                    color: Color32::BLACK,
                },
                SurfaceOp::Text {
                    text: "x".to_owned(),
                    anchor: Pos2::new(20.0, 20.0),
                    font_size: 96.0,
                    color: Color32::BLACK,
                },
            ]
        );
    }
}
