#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod cursor;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tool;
pub mod util;

/// Canvas-space coordinate
pub type Point = egui::Pos2;

pub use app::SketchpadApp;
pub use command::CommandLog;
pub use config::SketchpadConfig;
pub use cursor::CursorPreview;
pub use element::{Drawable, Element, Sticker, Stroke};
pub use error::{ConfigError, ExportError, HistoryError, StickerError};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use export::ExportArtifact;
pub use id_generator::DrawableId;
pub use input::{InputEvent, InputHandler, InputSession, SessionState};
pub use renderer::Renderer;
pub use state::EditorContext;
pub use surface::{RasterSurface, RecordingSurface, ScaledSurface, Surface, SurfaceOp};
pub use tool::{ColorRoller, StickerPalette, ToolMode, ToolState};
