use eframe::egui;

use crate::SketchApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::input::{ColorChoice, InputEvent};
use crate::tools::Tool;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let options = *app.controller().options();
    let palette = app.controller().config().palette.clone();
    let width_range = app.controller().config().brush_width_range.clone();
    let state_name = app.controller().state().name();

    let mut events = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            ui.heading("Shapes");
            ui.horizontal_wrapped(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, options.tool == tool).show(ui).clicked() {
                        events.push(InputEvent::SelectTool(tool));
                    }
                }
            });

            let mut fill = options.fill;
            if ui.checkbox(&mut fill, "Fill color").changed() {
                events.push(InputEvent::SetFill(fill));
            }

            ui.separator();
            ui.heading("Options");
            let mut brush_width = options.brush_width;
            if ui
                .add(egui::Slider::new(&mut brush_width, width_range).text("Size"))
                .changed()
            {
                events.push(InputEvent::SetBrushWidth(brush_width));
            }

            ui.separator();
            ui.heading("Colors");
            ui.horizontal_wrapped(|ui| {
                for (index, color) in palette.iter().enumerate() {
                    if ColorSwatch::new(*color, options.color == *color).show(ui).clicked() {
                        events.push(InputEvent::SelectColor(ColorChoice::Palette(index)));
                    }
                }

                let mut custom = options.color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut custom,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    events.push(InputEvent::SelectColor(ColorChoice::Custom(custom)));
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Clear canvas").clicked() {
                    events.push(InputEvent::Clear);
                }
                if ui.button("Save as image").clicked() {
                    events.push(InputEvent::Export);
                }
            });

            ui.separator();
            ui.label(format!("{} ({})", options.tool, state_name));
        });

    for event in events {
        log::debug!("Tools panel event: {:?}", event);
        app.controller_mut().handle_event(event);
    }
}
