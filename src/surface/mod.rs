//! The painting vocabulary the drawing core depends on.
//!
//! A [`Surface`] mirrors the handful of immediate-mode primitives a 2D canvas
//! offers. Drawables, the cursor preview and the repaint loop only ever talk
//! to this trait, so the same replay can target the egui painter, an offscreen
//! raster for export, or a recorder in tests.

use egui::{Color32, Pos2, Rect, Vec2};

mod painter;
mod raster;
mod recording;
mod scaled;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{RecordingSurface, SurfaceOp};
pub use scaled::ScaledSurface;

pub trait Surface {
    /// Size of the paintable area in surface units
    fn size(&self) -> Vec2;

    /// Erase everything inside `region`
    fn clear(&mut self, region: Rect);

    /// Start a new sub-path at `point`
    fn move_to(&mut self, point: Pos2);

    /// Extend the current sub-path to `point`
    fn line_to(&mut self, point: Pos2);

    /// Paint the accumulated path and start a fresh one.
    ///
    /// Sub-paths with fewer than two points paint nothing.
    fn stroke(&mut self, width: f32, color: Color32);

    /// Paint `text` with its bottom-left corner at `anchor`
    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32);

    fn full_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }
}

/// Sub-path bookkeeping shared by the concrete surfaces
#[derive(Debug, Default, Clone)]
pub(crate) struct PathBuilder {
    subpaths: Vec<Vec<Pos2>>,
}

impl PathBuilder {
    pub(crate) fn move_to(&mut self, point: Pos2) {
        self.subpaths.push(vec![point]);
    }

    pub(crate) fn line_to(&mut self, point: Pos2) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            // A canvas treats a leading lineTo as moveTo
            None => self.subpaths.push(vec![point]),
        }
    }

    pub(crate) fn take(&mut self) -> Vec<Vec<Pos2>> {
        std::mem::take(&mut self.subpaths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder_subpaths() {
        let mut path = PathBuilder::default();
        path.line_to(Pos2::new(1.0, 1.0));
        path.line_to(Pos2::new(2.0, 2.0));
        path.move_to(Pos2::new(5.0, 5.0));

        let subpaths = path.take();
        assert_eq!(subpaths.len(), 2);
        assert_eq!(subpaths[0], vec![Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]);
        assert_eq!(subpaths[1], vec![Pos2::new(5.0, 5.0)]);
        assert!(path.take().is_empty());
    }
}
