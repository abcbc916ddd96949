use std::fs;
use std::path::{Path, PathBuf};

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file to load at startup
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup configuration for the sketchpad.
///
/// Every field has a default, so a config file only needs to list the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Window title and canvas header
    pub title: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Marker width of the "thin" tool
    pub thin_width: f32,
    /// Marker width of the "thick" tool
    pub thick_width: f32,
    /// Thickness used for the cursor preview while a sticker is selected
    pub sticker_cursor_thickness: f32,
    /// Font size of placed stickers
    pub sticker_size: f32,
    /// Cursor glyph shown while drawing freehand
    pub default_glyph: String,
    /// Glyph used when a custom sticker is requested with empty text
    pub default_custom_glyph: String,
    /// Built-in sticker palette
    pub stickers: Vec<String>,
    pub initial_color: [u8; 3],
    pub reroll_color_on_tool_change: bool,
    pub export_scale: f32,
    pub export_file_name: String,
    /// Directory native builds write exports into
    pub export_dir: PathBuf,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            title: "Sketchpad".to_owned(),
            canvas_width: 256.0,
            canvas_height: 256.0,
            thin_width: 1.0,
            thick_width: 4.0,
            sticker_cursor_thickness: 2.0,
            sticker_size: 24.0,
            default_glyph: "⚬".to_owned(),
            default_custom_glyph: "🙂".to_owned(),
            stickers: vec!["☕".to_owned(), "🍩".to_owned(), "🍦".to_owned()],
            initial_color: [0, 0, 0],
            reroll_color_on_tool_change: true,
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl SketchpadConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, falling back to defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Ignoring config {}: {}",
                    Path::new(&path).display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("thin_width", self.thin_width),
            ("thick_width", self.thick_width),
            ("sticker_cursor_thickness", self.sticker_cursor_thickness),
            ("sticker_size", self.sticker_size),
            ("export_scale", self.export_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "export_file_name must not be empty".to_owned(),
            ));
        }
        if self.default_glyph.trim().is_empty() || self.default_custom_glyph.trim().is_empty() {
            return Err(ConfigError::Invalid("default glyphs must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    pub fn initial_color(&self) -> Color32 {
        let [r, g, b] = self.initial_color;
        Color32::from_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SketchpadConfig::from_json(r#"{ "thick_width": 8, "title": "Pad" }"#).unwrap();
        assert_eq!(config.thick_width, 8.0);
        assert_eq!(config.title, "Pad");
        assert_eq!(config.thin_width, 1.0);
        assert_eq!(config.export_scale, 4.0);
        assert_eq!(config.stickers.len(), 3);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = SketchpadConfig::from_json(r#"{ "export_scale": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SketchpadConfig::from_json(r#"{ "canvas_width": -5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SketchpadConfig::from_json("{ thin_width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = SketchpadConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
