use std::ops::RangeInclusive;
use std::path::PathBuf;

use egui::Color32;

use crate::export::ExportFormat;

/// Smallest and largest brush width the size slider offers
pub const BRUSH_WIDTH_RANGE: RangeInclusive<u32> = 1..=50;
pub const DEFAULT_BRUSH_WIDTH: u32 = 5;

/// Startup configuration for the canvas and the window hosting it.
///
/// There is no configuration file: the defaults below are the app's settings,
/// and tests build variations of them directly.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Fill color of a fresh canvas, also the color the eraser paints with
    pub background: Color32,
    /// Initial stroke/fill color
    pub default_color: Color32,
    pub default_brush_width: u32,
    pub brush_width_range: RangeInclusive<u32>,
    /// Discrete color choices shown as swatches
    pub palette: Vec<Color32>,
    /// Initial window size for native builds
    pub window_size: [f32; 2],
    /// Where native builds write exported images
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            default_color: Color32::BLACK,
            default_brush_width: DEFAULT_BRUSH_WIDTH,
            brush_width_range: BRUSH_WIDTH_RANGE,
            palette: vec![
                Color32::WHITE,
                Color32::BLACK,
                Color32::from_rgb(0xE0, 0x20, 0x20),
                Color32::from_rgb(0x6D, 0xD4, 0x00),
                Color32::from_rgb(0x4A, 0x98, 0xF7),
            ],
            window_size: [1100.0, 700.0],
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::Jpeg,
        }
    }
}

impl CanvasConfig {
    /// Clamp a width coming from a control into the configured range
    pub fn clamp_brush_width(&self, width: u32) -> u32 {
        width.clamp(*self.brush_width_range.start(), *self.brush_width_range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CanvasConfig::default();
        assert_eq!(config.background, Color32::WHITE);
        assert_eq!(config.default_color, Color32::BLACK);
        assert_eq!(config.default_brush_width, 5);
        assert!(config.palette.contains(&Color32::BLACK));
    }

    #[test]
    fn test_clamp_brush_width() {
        let config = CanvasConfig::default();
        assert_eq!(config.clamp_brush_width(0), 1);
        assert_eq!(config.clamp_brush_width(12), 12);
        assert_eq!(config.clamp_brush_width(80), 50);
    }
}
