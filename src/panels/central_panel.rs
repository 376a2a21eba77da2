use crate::app::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let frame = egui::Frame::none().fill(app.background());
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let canvas_rect = ui.available_rect_before_wrap();
        ui.allocate_rect(canvas_rect, egui::Sense::hover());

        // Handle input
        let events = app.pointer_mut().process_input(ctx, canvas_rect);
        if !events.is_empty() {
            app.handle_pointer_events(&events);
        }

        // Render the canvas
        let painter = ui.painter_at(canvas_rect);
        app.surface().paint(&painter, canvas_rect.min);
    });
}
