use egui::{Color32, Pos2, Rect, Vec2};

use super::{PathBuilder, Surface};

/// One painting call as seen by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear(Rect),
    /// One stroked sub-path, including single-point ones
    Stroke {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Text {
        text: String,
        anchor: Pos2,
        font_size: f32,
        color: Color32,
    },
}

/// Surface that paints nothing and remembers every call instead
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    path: PathBuilder,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            path: PathBuilder::default(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        self.ops.push(SurfaceOp::Clear(region));
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        for points in self.path.take() {
            self.ops.push(SurfaceOp::Stroke {
                points,
                width,
                color,
            });
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        self.ops.push(SurfaceOp::Text {
            text: text.to_owned(),
            anchor,
            font_size,
            color,
        });
    }
}
