/// Drawing tools offered by the tools panel
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Tool {
    /// Freehand stroke in the active color
    #[default]
    Brush,
    /// Freehand stroke in the background color
    Eraser,
    Rectangle,
    Circle,
    Triangle,
}

impl Tool {
    /// Every tool, in panel order
    pub const ALL: [Tool; 5] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
    ];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
        }
    }

    /// Glyph shown on the tool button
    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
            Tool::Rectangle => "◻",
            Tool::Circle => "○",
            Tool::Triangle => "△",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
