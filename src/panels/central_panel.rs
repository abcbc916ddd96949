use crate::SketchpadApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.context().config().title.as_str());
        ui.add_space(8.0);

        let canvas_size = app.context().config().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // The preview glyph stands in for the pointer
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        let (input, context) = app.input_and_context();
        for event in input.process_input(ctx, canvas_rect) {
            context.handle_input(event);
        }

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        context.repaint(&mut surface);
    });
}
