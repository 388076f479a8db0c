use eframe::egui;

/// Round palette swatch; the selected one gets a ring
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(22.0, 22.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = rect.width() / 2.0 - 2.0;
            let painter = ui.painter();
            painter.circle_filled(rect.center(), radius, self.color);
            painter.circle_stroke(rect.center(), radius, egui::Stroke::new(1.0, egui::Color32::GRAY));

            if self.selected {
                painter.circle_stroke(
                    rect.center(),
                    radius + 2.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
