use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            // The drawing area fills whatever the tools panel leaves
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.layout_canvas(canvas_rect);
            app.handle_canvas_input(ctx, &response);
            app.render_canvas(ctx, &painter, canvas_rect);
        });
}
