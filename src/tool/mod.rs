use egui::Color32;

mod color;
mod palette;

pub use color::ColorRoller;
pub use palette::StickerPalette;

/// What a pointer-down creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Record a freehand stroke
    #[default]
    Freehand,
    /// Stamp the active glyph as a sticker
    Stamp,
}

/// The configuration applied to newly created drawables.
///
/// Only tool-selection actions mutate it; drawing never does.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    thickness: f32,
    mode: ToolMode,
    glyph: String,
    color: Color32,
}

impl ToolState {
    /// Freehand tool of the given thickness
    pub fn new(thickness: f32, glyph: impl Into<String>, color: Color32) -> Self {
        Self {
            thickness,
            mode: ToolMode::Freehand,
            glyph: glyph.into(),
            color,
        }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Active sticker glyph, or the cursor glyph in freehand mode
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_stamp(&self) -> bool {
        self.mode == ToolMode::Stamp
    }

    /// Switch to a freehand marker; the cursor glyph goes back to `cursor_glyph`
    pub fn set_freehand(&mut self, thickness: f32, cursor_glyph: &str) {
        self.mode = ToolMode::Freehand;
        self.thickness = thickness;
        self.glyph = cursor_glyph.to_owned();
    }

    /// Switch to stamping `glyph`
    pub fn set_stamp(&mut self, glyph: &str, cursor_thickness: f32) {
        self.mode = ToolMode::Stamp;
        self.thickness = cursor_thickness;
        self.glyph = glyph.to_owned();
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }
}
