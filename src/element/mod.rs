use egui::{Pos2, Rect};

mod sticker;
mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

use crate::id_generator::DrawableId;
use crate::surface::Surface;
use crate::tool::{ToolMode, ToolState};

/// Common trait that all recorded drawing units implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> DrawableId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Feed the latest pointer position while the element is open
    fn extend(&mut self, point: Pos2);

    /// Paint the element using only its own recorded attributes
    fn render(&self, surface: &mut dyn Surface);

    /// Rectangle covering everything the element paints
    fn bounds(&self) -> Rect;
}

/// One committed unit of drawing
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Open a new drawable at `point` from the current tool configuration
    pub fn begin(point: Pos2, tool: &ToolState, sticker_size: f32) -> Self {
        match tool.mode() {
            ToolMode::Freehand => Self::Stroke(Stroke::new(point, tool.thickness(), tool.color())),
            ToolMode::Stamp => Self::Sticker(Sticker::new(
                point,
                tool.glyph(),
                sticker_size,
                tool.color(),
            )),
        }
    }

    /// Number of recorded points; stickers only ever hold their anchor
    pub fn point_count(&self) -> usize {
        match self {
            Self::Stroke(stroke) => stroke.points().len(),
            Self::Sticker(_) => 1,
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}

impl Element for Drawable {
    fn id(&self) -> DrawableId {
        match self {
            Self::Stroke(stroke) => stroke.id(),
            Self::Sticker(sticker) => sticker.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            Self::Stroke(stroke) => stroke.element_type(),
            Self::Sticker(sticker) => sticker.element_type(),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.extend(point),
            Self::Sticker(sticker) => sticker.extend(point),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Self::Stroke(stroke) => stroke.bounds(),
            Self::Sticker(sticker) => sticker.bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::{Color32, Vec2};

    fn recorder() -> RecordingSurface {
        RecordingSurface::new(Vec2::splat(256.0))
    }

    #[test]
    fn test_stroke_renders_connected_path_in_order() {
        let mut stroke = Stroke::new(Pos2::new(1.0, 1.0), 4.0, Color32::RED);
        stroke.extend(Pos2::new(2.0, 3.0));
        stroke.extend(Pos2::new(5.0, 8.0));

        let mut surface = recorder();
        stroke.render(&mut surface);
        stroke.render(&mut surface);

        let expected = SurfaceOp::Stroke {
            points: vec![Pos2::new(1.0, 1.0), Pos2::new(2.0, 3.0), Pos2::new(5.0, 8.0)],
            width: 4.0,
            color: Color32::RED,
        };
        assert_eq!(surface.ops(), &[expected.clone(), expected]);
    }

    #[test]
    fn test_single_point_stroke_is_zero_length_path() {
        let stroke = Stroke::new(Pos2::new(7.0, 7.0), 1.0, Color32::BLACK);
        let mut surface = recorder();
        stroke.render(&mut surface);

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Stroke {
                points: vec![Pos2::new(7.0, 7.0)],
                width: 1.0,
                color: Color32::BLACK,
            }]
        );
    }

    #[test]
    fn test_sticker_keeps_only_last_position() {
        let mut sticker = Sticker::new(Pos2::new(0.0, 0.0), "🍩", 24.0, Color32::BLACK);
        for point in [Pos2::new(3.0, 4.0), Pos2::new(10.0, 12.0), Pos2::new(40.0, 41.0)] {
            sticker.extend(point);
        }

        let mut surface = recorder();
        sticker.render(&mut surface);
        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Text {
                text: "🍩".to_owned(),
                anchor: Pos2::new(40.0, 41.0),
                font_size: 24.0,
                color: Color32::BLACK,
            }]
        );
    }

    #[test]
    fn test_bounds() {
        let mut stroke = Stroke::new(Pos2::new(10.0, 20.0), 4.0, Color32::BLACK);
        stroke.extend(Pos2::new(30.0, 5.0));
        assert_eq!(
            Drawable::Stroke(stroke).bounds(),
            Rect::from_min_max(Pos2::new(8.0, 3.0), Pos2::new(32.0, 22.0))
        );

        let sticker = Sticker::new(Pos2::new(40.0, 50.0), "☕", 24.0, Color32::BLACK);
        assert_eq!(
            Drawable::Sticker(sticker).bounds(),
            Rect::from_min_max(Pos2::new(40.0, 26.0), Pos2::new(64.0, 50.0))
        );
    }

    #[test]
    fn test_begin_follows_tool_mode() {
        let mut tool = ToolState::new(3.0, "⚬", Color32::BLUE);
        let stroke = Drawable::begin(Pos2::new(1.0, 2.0), &tool, 24.0);
        assert_eq!(stroke.element_type(), "stroke");
        assert_eq!(stroke.as_stroke().unwrap().width(), 3.0);
        assert_eq!(stroke.as_stroke().unwrap().color(), Color32::BLUE);

        tool.set_stamp("☕", 2.0);
        let sticker = Drawable::begin(Pos2::new(1.0, 2.0), &tool, 24.0);
        assert_eq!(sticker.element_type(), "sticker");
        assert_eq!(sticker.as_sticker().unwrap().glyph(), "☕");
        assert_eq!(sticker.as_sticker().unwrap().size(), 24.0);
        assert_ne!(stroke.id(), sticker.id());
    }

    #[test]
    fn test_render_ignores_later_tool_changes() {
        let mut tool = ToolState::new(1.0, "⚬", Color32::RED);
        let mut drawable = Drawable::begin(Pos2::new(0.0, 0.0), &tool, 24.0);
        drawable.extend(Pos2::new(5.0, 5.0));
        tool.set_freehand(4.0, "⚬");
        tool.set_color(Color32::GREEN);

        let mut surface = recorder();
        drawable.render(&mut surface);
        match &surface.ops()[0] {
            SurfaceOp::Stroke { width, color, .. } => {
                assert_eq!(*width, 1.0);
                assert_eq!(*color, Color32::RED);
            }
            op => panic!("unexpected op {op:?}"),
        }
    }
}
