use crate::SketchpadApp;
use crate::components::ToolButton;
use crate::tool::ToolMode;

enum ToolAction {
    Freehand(f32),
    Stamp(String),
    CustomSticker,
    RerollColor,
}

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                let can_undo = app.context().log().can_undo();
                let can_redo = app.context().log().can_redo();

                if ui.button("clear").clicked() {
                    app.context_mut().clear();
                }
                if ui.add_enabled(can_undo, egui::Button::new("undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("redo")).clicked() {
                    app.redo();
                }
                if ui.button("export").clicked() {
                    app.export();
                }
            });

            let log = app.context().log();
            ui.label(format!(
                "Drawables: {}  Redo: {}",
                log.committed().len(),
                log.redo_stack().len()
            ));
            ui.separator();

            let mut action = None;
            let config = app.context().config();
            let tool = app.context().tool();
            let freehand = tool.mode() == ToolMode::Freehand;

            ui.label("Markers");
            ui.horizontal(|ui| {
                for (label, width) in [("thin", config.thin_width), ("thick", config.thick_width)] {
                    let selected = freehand && tool.thickness() == width;
                    if ToolButton::new(label, selected).min_width(56.0).show(ui).clicked() {
                        action = Some(ToolAction::Freehand(width));
                    }
                }
            });
            ui.separator();

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                for glyph in app.context().palette().glyphs() {
                    let selected = !freehand && tool.glyph() == glyph;
                    if ToolButton::new(glyph, selected).show(ui).clicked() {
                        action = Some(ToolAction::Stamp(glyph.clone()));
                    }
                }
            });

            let color = tool.color();
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(app.custom_sticker_text_mut())
                        .hint_text("🙂")
                        .desired_width(60.0),
                );
                if ui.button("custom").clicked() {
                    action = Some(ToolAction::CustomSticker);
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                ui.painter().rect_filled(swatch, 4.0, color);
                if ui.button("🎲 color").clicked() {
                    action = Some(ToolAction::RerollColor);
                }
            });

            match action {
                Some(ToolAction::Freehand(width)) => app.context_mut().select_freehand(width),
                Some(ToolAction::Stamp(glyph)) => app.context_mut().select_stamp(&glyph),
                Some(ToolAction::CustomSticker) => app.add_custom_sticker(),
                Some(ToolAction::RerollColor) => app.context_mut().reroll_color(),
                None => {}
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
