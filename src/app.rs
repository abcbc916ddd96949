use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchpadConfig;
use crate::event::{EventHandler, SketchEvent};
use crate::export::{ExportArtifact, ExportResult};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::EditorContext;

const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// Asks egui for a new frame whenever the sketch changes
struct RepaintRequester(egui::Context);

impl EventHandler for RepaintRequester {
    fn handle_event(&mut self, event: &SketchEvent) {
        log::trace!("{event:?}");
        self.0.request_repaint();
    }
}

pub struct SketchpadApp {
    context: EditorContext,
    input: InputHandler,
    custom_sticker_text: String,
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        let context = EditorContext::new(config);
        context
            .event_bus
            .subscribe(Box::new(RepaintRequester(cc.egui_ctx.clone())));
        Self {
            context,
            input: InputHandler::new(),
            custom_sticker_text: String::new(),
            status: None,
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.context
    }

    /// Split borrow for panels that feed input into the context
    pub fn input_and_context(&mut self) -> (&mut InputHandler, &mut EditorContext) {
        (&mut self.input, &mut self.context)
    }

    pub fn custom_sticker_text_mut(&mut self) -> &mut String {
        &mut self.custom_sticker_text
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn undo(&mut self) {
        if let Err(err) = self.context.undo() {
            self.status = Some(err.to_string());
        }
    }

    pub fn redo(&mut self) {
        if let Err(err) = self.context.redo() {
            self.status = Some(err.to_string());
        }
    }

    pub fn add_custom_sticker(&mut self) {
        let text = std::mem::take(&mut self.custom_sticker_text);
        self.status = match self.context.add_custom_sticker(&text) {
            Ok(()) => None,
            Err(err) => Some(err.to_string()),
        };
    }

    /// Render the drawing at export scale and hand it to the platform
    pub fn export(&mut self) {
        let result = self
            .context
            .export()
            .and_then(|artifact| self.deliver(&artifact));
        self.status = Some(match result {
            Ok(message) => message,
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver(&self, artifact: &ExportArtifact) -> ExportResult<String> {
        let path = artifact.save_to(&self.context.config().export_dir)?;
        Ok(format!("Exported {}", path.display()))
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver(&self, artifact: &ExportArtifact) -> ExportResult<String> {
        artifact.download()?;
        Ok(format!("Exported {}", artifact.file_name))
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift+Z first: the plain undo shortcut also matches it
        let (redo, undo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO_SHORTCUT)
                || input.consume_shortcut(&REDO_SHORTCUT_ALT);
            let undo = !redo && input.consume_shortcut(&UNDO_SHORTCUT);
            (redo, undo)
        });
        if redo {
            self.redo();
        }
        if undo {
            self.undo();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
