//! The main context for the sketchpad, owning every piece of drawing state
//! and coordinating between them.
//!
//! The `EditorContext` is the single entry point for everything the UI can
//! do: pointer events go through [`EditorContext::handle_input`], buttons map
//! to the discrete actions (`clear`, `undo`, `redo`, `export`, tool
//! selection), and [`EditorContext::repaint`] replays the drawing onto a
//! surface.
//!
//! # Signals
//!
//! Every successful mutation publishes a [`SketchEvent`] on the context's
//! event bus before the call returns:
//! - `ContentChanged` after commit, extend, undo, redo and clear
//! - `PreviewChanged` after cursor movement and tool changes
//!
//! Reported no-ops (undo with nothing to undo, extend with no open drawable)
//! publish nothing.
//!
//! # Example
//!
//! ```rust
//! use sketchpad::{EditorContext, InputEvent, SketchpadConfig};
//! use egui::Pos2;
//!
//! let mut context = EditorContext::new(SketchpadConfig::default());
//! context.handle_input(InputEvent::PointerDown(Pos2::new(10.0, 10.0)));
//! context.handle_input(InputEvent::PointerMove(Pos2::new(20.0, 20.0)));
//! context.handle_input(InputEvent::PointerUp);
//! assert_eq!(context.log().len(), 1);
//!
//! context.undo().unwrap();
//! assert!(context.log().is_empty());
//! ```

use egui::Pos2;

use crate::command::{CommandLog, HistoryResult};
use crate::config::SketchpadConfig;
use crate::cursor::CursorPreview;
use crate::element::Element;
use crate::error::StickerError;
use crate::event::{EventBus, SketchEvent};
use crate::export::{self, ExportArtifact, ExportResult};
use crate::input::{InputEvent, InputSession, SessionState};
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::tool::{ColorRoller, StickerPalette, ToolState};

/// The main context for the sketchpad.
#[derive(Debug)]
pub struct EditorContext {
    config: SketchpadConfig,
    log: CommandLog,
    tool: ToolState,
    palette: StickerPalette,
    colors: ColorRoller,
    session: InputSession,
    cursor: Option<CursorPreview>,
    renderer: Renderer,
    /// The event bus for broadcasting sketch events
    pub event_bus: EventBus,
}

impl EditorContext {
    /// Creates a context with an empty log and the thin marker selected.
    pub fn new(config: SketchpadConfig) -> Self {
        Self::with_color_roller(config, ColorRoller::new())
    }

    /// Like [`EditorContext::new`] with a caller-provided color source, so
    /// color rerolls are reproducible.
    pub fn with_color_roller(config: SketchpadConfig, colors: ColorRoller) -> Self {
        let tool = ToolState::new(
            config.thin_width,
            config.default_glyph.as_str(),
            config.initial_color(),
        );
        let palette = StickerPalette::new(&config.stickers);
        Self {
            config,
            log: CommandLog::new(),
            tool,
            palette,
            colors,
            session: InputSession::new(),
            cursor: None,
            renderer: Renderer::new(),
            event_bus: EventBus::new(),
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn cursor(&self) -> Option<&CursorPreview> {
        self.cursor.as_ref()
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    /// Apply one pointer event.
    ///
    /// Cursor preview and drawing session have independent lifecycles: leaving
    /// the canvas drops the preview but keeps an open drawable open until the
    /// pointer is released.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerEnter(pos) => {
                self.cursor = Some(CursorPreview::new(pos, &self.tool));
                self.event_bus.emit(SketchEvent::PreviewChanged);
            }
            InputEvent::PointerLeave => {
                if self.cursor.take().is_some() {
                    self.event_bus.emit(SketchEvent::PreviewChanged);
                }
            }
            InputEvent::PointerDown(pos) => {
                self.move_cursor(pos);
                self.session
                    .begin(pos, &self.tool, &mut self.log, self.config.sticker_size);
                self.event_bus.emit(SketchEvent::ContentChanged);
            }
            InputEvent::PointerMove(pos) => {
                let moved = self.move_cursor(pos);
                if self.session.extend(pos, &mut self.log) {
                    self.event_bus.emit(SketchEvent::ContentChanged);
                } else if moved {
                    self.event_bus.emit(SketchEvent::PreviewChanged);
                }
            }
            InputEvent::PointerUp => {
                if let SessionState::Drawing { id } = self.session.state() {
                    if let Some(drawable) = self.log.get(id) {
                        log::debug!(
                            "Finished {} {id} covering {:?}",
                            drawable.element_type(),
                            drawable.bounds()
                        );
                    }
                }
                if self.session.end() {
                    self.event_bus.emit(SketchEvent::ContentChanged);
                }
            }
        }
    }

    fn move_cursor(&mut self, pos: Pos2) -> bool {
        match &mut self.cursor {
            Some(cursor) => {
                cursor.move_to(pos);
                true
            }
            None => false,
        }
    }

    /// Empty the canvas; redo history is kept
    pub fn clear(&mut self) {
        self.log.clear();
        log::debug!("Cleared canvas, {} drawables left to redo", self.log.redo_stack().len());
        self.event_bus.emit(SketchEvent::ContentChanged);
    }

    pub fn undo(&mut self) -> HistoryResult {
        self.report(|log| log.undo())
    }

    pub fn redo(&mut self) -> HistoryResult {
        self.report(|log| log.redo())
    }

    fn report(&mut self, op: impl FnOnce(&mut CommandLog) -> HistoryResult) -> HistoryResult {
        match op(&mut self.log) {
            Ok(()) => {
                self.event_bus.emit(SketchEvent::ContentChanged);
                Ok(())
            }
            Err(err) => {
                log::debug!("{err}");
                Err(err)
            }
        }
    }

    /// Select a freehand marker of the given thickness
    pub fn select_freehand(&mut self, thickness: f32) {
        self.tool.set_freehand(thickness, &self.config.default_glyph);
        log::debug!("Selected marker of thickness {thickness}");
        self.tool_changed();
    }

    /// Select a sticker glyph for stamping
    pub fn select_stamp(&mut self, glyph: &str) {
        self.tool
            .set_stamp(glyph, self.config.sticker_cursor_thickness);
        log::debug!("Selected sticker {glyph}");
        self.tool_changed();
    }

    /// Add a custom sticker to the palette and select it.
    ///
    /// Blank text falls back to the configured default glyph. Glyphs already
    /// in the palette are rejected and leave the tool untouched.
    pub fn add_custom_sticker(&mut self, text: &str) -> Result<(), StickerError> {
        let glyph = self
            .palette
            .add_custom(text, &self.config.default_custom_glyph)
            .inspect_err(|err| log::warn!("Rejected custom sticker: {err}"))?;
        self.select_stamp(&glyph);
        Ok(())
    }

    /// Pick a new random marker color
    pub fn reroll_color(&mut self) {
        let color = self.colors.next_color();
        self.tool.set_color(color);
        log::debug!("Rolled marker color {color:?}");
        self.sync_preview();
    }

    fn tool_changed(&mut self) {
        if self.config.reroll_color_on_tool_change {
            self.tool.set_color(self.colors.next_color());
        }
        self.sync_preview();
    }

    fn sync_preview(&mut self) {
        if let Some(cursor) = &mut self.cursor {
            cursor.sync_tool(&self.tool);
        }
        self.event_bus.emit(SketchEvent::PreviewChanged);
    }

    /// Full clear-and-redraw of `surface` from the log plus cursor preview
    pub fn repaint(&mut self, surface: &mut dyn Surface) {
        self.renderer
            .repaint(surface, self.cursor.as_ref(), &self.log);
    }

    /// Render the committed drawing at the configured scale and encode it
    pub fn export(&self) -> ExportResult<ExportArtifact> {
        let image = export::render_export(
            &self.log,
            self.config.canvas_size(),
            self.config.export_scale,
        )?;
        ExportArtifact::new(self.config.export_file_name.as_str(), &image)
    }
}
