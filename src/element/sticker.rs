use egui::{Color32, Pos2, Rect, Vec2};

use super::Element;
use crate::id_generator::DrawableId;
use crate::surface::Surface;

/// Single glyph stamped at the latest pointer position
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    anchor: Pos2,
    glyph: String,
    size: f32,
    color: Color32,
}

impl Sticker {
    pub fn new(anchor: Pos2, glyph: impl Into<String>, size: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::next(),
            anchor,
            glyph: glyph.into(),
            size,
            color,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Element for Sticker {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "sticker"
    }

    /// Dragging a sticker moves it; only the last position is kept.
    fn extend(&mut self, point: Pos2) {
        self.anchor = point;
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_text(&self.glyph, self.anchor, self.size, self.color);
    }

    /// Approximation: one square em above the anchor
    fn bounds(&self) -> Rect {
        Rect::from_min_size(
            self.anchor - Vec2::new(0.0, self.size),
            Vec2::splat(self.size),
        )
    }
}
