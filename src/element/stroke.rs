use egui::{Color32, Pos2, Rect};

use super::Element;
use crate::id_generator::DrawableId;
use crate::surface::Surface;

/// Freehand path of recorded points
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: DrawableId,
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    /// Start a stroke at `start`; a stroke always has at least one point.
    pub fn new(start: Pos2, width: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::next(),
            points: vec![start],
            width,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Element for Stroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// `move_to` the first point, `line_to` the rest, then stroke.
    ///
    /// A single-point stroke still issues the zero-length path; surfaces
    /// paint nothing for it.
    fn render(&self, surface: &mut dyn Surface) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        surface.move_to(*first);
        for point in rest {
            surface.line_to(*point);
        }
        surface.stroke(self.width, self.color);
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(&self.points).expand(self.width / 2.0)
    }
}
