use eframe::egui;

use crate::tools::Tool;

const BUTTON_SIZE: f32 = 36.0;
const ICON_SIZE: f32 = 18.0;

/// Rounded tile for one drawing tool, colored from the active theme
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    /// Fill, icon color and outline for the tile
    fn tile_colors(
        &self,
        visuals: &egui::Visuals,
        hovered: bool,
    ) -> (egui::Color32, egui::Color32, egui::Stroke) {
        if self.selected {
            let accent = visuals.selection.bg_fill;
            (accent, visuals.selection.stroke.color, egui::Stroke::new(1.0, accent))
        } else if hovered {
            let widget = &visuals.widgets.hovered;
            (widget.weak_bg_fill, widget.fg_stroke.color, widget.bg_stroke)
        } else {
            let widget = &visuals.widgets.inactive;
            (widget.weak_bg_fill, widget.fg_stroke.color, egui::Stroke::NONE)
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let (fill, icon_color, outline) = self.tile_colors(ui.visuals(), response.hovered());
            let rounding = egui::Rounding::same(6.0);
            let tile = rect.shrink(1.0);
            let painter = ui.painter();

            painter.rect_filled(tile, rounding, fill);
            painter.rect_stroke(tile, rounding, outline);
            painter.text(
                tile.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(ICON_SIZE),
                icon_color,
            );
        }

        response.on_hover_text(self.tool.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tile_uses_selection_accent() {
        let visuals = egui::Visuals::light();
        let (fill, icon, _) = ToolButton::new(Tool::Circle, true).tile_colors(&visuals, false);
        assert_eq!(fill, visuals.selection.bg_fill);
        assert_eq!(icon, visuals.selection.stroke.color);
    }

    #[test]
    fn test_outline_only_on_hover_or_selection() {
        let visuals = egui::Visuals::light();
        let button = ToolButton::new(Tool::Brush, false);
        let (_, _, idle) = button.tile_colors(&visuals, false);
        let (hover_fill, _, hovered) = button.tile_colors(&visuals, true);

        assert_eq!(idle, egui::Stroke::NONE);
        assert_eq!(hovered, visuals.widgets.hovered.bg_stroke);
        assert_eq!(hover_fill, visuals.widgets.hovered.weak_bg_fill);
    }
}
