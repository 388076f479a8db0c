use egui::{Color32, Pos2};

use crate::config::CanvasConfig;
use crate::surface::Snapshot;
use crate::tools::Tool;

/// User-selected drawing options, applied to the next stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolOptions {
    pub tool: Tool,
    /// Active stroke/fill color, always opaque
    pub color: Color32,
    pub brush_width: u32,
    /// Whether shape tools draw filled or outlined
    pub fill: bool,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl ToolOptions {
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            tool: Tool::default(),
            color: config.default_color,
            brush_width: config.default_brush_width,
            fill: false,
        }
    }
}

/// Everything a stroke latches at pointer-down
#[derive(Debug, Clone)]
pub struct ActiveStroke {
    /// Pointer position at pointer-down
    pub anchor: Pos2,
    /// End of the last segment drawn by a path tool
    pub last_point: Pos2,
    /// Buffer contents at pointer-down
    pub snapshot: Snapshot,
    pub tool: Tool,
    /// Resolved stroke color (the background for the eraser)
    pub color: Color32,
    pub line_width: f32,
    pub fill: bool,
}

/// Stroke lifecycle: `Idle` until pointer-down, `Drawing` until pointer-up
#[derive(Debug, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing(ActiveStroke),
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    pub fn active_stroke(&self) -> Option<&ActiveStroke> {
        match self {
            Self::Drawing(stroke) => Some(stroke),
            Self::Idle => None,
        }
    }

    pub fn active_stroke_mut(&mut self) -> Option<&mut ActiveStroke> {
        match self {
            Self::Drawing(stroke) => Some(stroke),
            Self::Idle => None,
        }
    }

    /// Anchor of the stroke in progress
    pub fn anchor(&self) -> Option<Pos2> {
        self.active_stroke().map(|stroke| stroke.anchor)
    }

    /// End the current stroke, returning it if there was one
    pub fn finish(&mut self) -> Option<ActiveStroke> {
        match std::mem::take(self) {
            Self::Drawing(stroke) => Some(stroke),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing(_) => "Drawing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelCanvas;
    use egui::pos2;

    fn stroke_at(anchor: Pos2) -> ActiveStroke {
        ActiveStroke {
            anchor,
            last_point: anchor,
            snapshot: PixelCanvas::new(4, 4, Color32::WHITE).snapshot(),
            tool: Tool::Brush,
            color: Color32::BLACK,
            line_width: 5.0,
            fill: false,
        }
    }

    #[test]
    fn test_default_options() {
        let options = ToolOptions::default();
        assert_eq!(options.tool, Tool::Brush);
        assert_eq!(options.color, Color32::BLACK);
        assert_eq!(options.brush_width, 5);
        assert!(!options.fill);
    }

    #[test]
    fn test_idle_state_has_no_stroke() {
        let mut state = EditorState::default();
        assert!(!state.is_drawing());
        assert_eq!(state.anchor(), None);
        assert!(state.finish().is_none());
        assert_eq!(state.name(), "Idle");
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut state = EditorState::Drawing(stroke_at(pos2(3.0, 4.0)));
        assert!(state.is_drawing());
        assert_eq!(state.anchor(), Some(pos2(3.0, 4.0)));

        let stroke = state.finish();
        assert_eq!(stroke.map(|s| s.anchor), Some(pos2(3.0, 4.0)));
        assert!(!state.is_drawing());
    }
}
