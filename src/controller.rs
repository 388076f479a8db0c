use egui::{Color32, Pos2};

use crate::config::CanvasConfig;
use crate::error::ExportError;
use crate::export::{self, ExportedImage};
use crate::geometry::Shape;
use crate::input::{ColorChoice, InputEvent};
use crate::state::{ActiveStroke, EditorState, ToolOptions};
use crate::surface::PixelCanvas;
use crate::tools::Tool;

/// Binds pointer input and tool options to a pixel canvas.
///
/// All mutation goes through [`DrawingController::handle_event`], one event at
/// a time in delivery order.
#[derive(Debug)]
pub struct DrawingController {
    canvas: PixelCanvas,
    options: ToolOptions,
    state: EditorState,
    config: CanvasConfig,
    /// Set once the first layout pass has sized the buffer
    laid_out: bool,
}

impl Default for DrawingController {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DrawingController {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            canvas: PixelCanvas::empty(),
            options: ToolOptions::from_config(&config),
            state: EditorState::Idle,
            config,
            laid_out: false,
        }
    }

    /// Size the buffer to the displayed surface and paint the background.
    ///
    /// Only the first call has an effect; later surface resizes leave the
    /// buffer as it is. Returns true when the buffer was (re)allocated.
    pub fn layout(&mut self, width: u32, height: u32) -> bool {
        if self.laid_out {
            return false;
        }
        self.canvas.resize(width, height, self.config.background);
        self.laid_out = true;
        log::info!("Canvas laid out at {}x{}", width, height);
        true
    }

    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn options(&self) -> &ToolOptions {
        &self.options
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn anchor(&self) -> Option<Pos2> {
        self.state.anchor()
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::SelectTool(tool) => self.set_tool(tool),
            InputEvent::SelectColor(choice) => self.select_color(choice),
            InputEvent::SetBrushWidth(width) => self.set_brush_width(width),
            InputEvent::SetFill(fill) => self.set_fill(fill),
            InputEvent::Clear => self.clear(),
            InputEvent::Export => {
                if let Err(err) = self.export() {
                    log::error!("Failed to export canvas: {}", err);
                }
            }
        }
    }

    /// Start a stroke: latch the options and snapshot the buffer
    pub fn pointer_down(&mut self, position: Pos2) {
        if self.state.is_drawing() {
            log::debug!("Pointer down while drawing, restarting stroke");
        }

        let ToolOptions { tool, color, brush_width, fill } = self.options;
        let color = match tool {
            Tool::Eraser => self.config.background,
            _ => color,
        };

        self.state = EditorState::Drawing(ActiveStroke {
            anchor: position,
            last_point: position,
            snapshot: self.canvas.snapshot(),
            tool,
            color,
            line_width: brush_width as f32,
            fill,
        });
        log::debug!("{} stroke started at {:?}", tool, position);
    }

    /// Extend the current stroke; a no-op while idle
    pub fn pointer_move(&mut self, position: Pos2) {
        let Some(stroke) = self.state.active_stroke_mut() else {
            return;
        };

        match Shape::from_drag(stroke.tool, stroke.anchor, position) {
            None => {
                self.canvas
                    .stroke_segment(stroke.last_point, position, stroke.line_width, stroke.color);
                stroke.last_point = position;
            }
            Some(shape) => {
                self.canvas.restore(&stroke.snapshot);
                draw_shape(&mut self.canvas, shape, stroke);
            }
        }
    }

    /// Finish the stroke, keeping whatever was last rendered
    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.state.finish() {
            log::debug!("{} stroke finished", stroke.tool);
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.options.tool != tool {
            log::info!("Tool changed: {} -> {}", self.options.tool, tool);
        }
        self.options.tool = tool;
    }

    pub fn select_color(&mut self, choice: ColorChoice) {
        let color = match choice {
            ColorChoice::Palette(index) => match self.config.palette.get(index) {
                Some(color) => *color,
                None => {
                    log::warn!("Ignoring palette index {} (palette has {} colors)", index, self.config.palette.len());
                    return;
                }
            },
            ColorChoice::Custom(color) => color,
        };
        self.set_color(color);
    }

    /// Set the active color; alpha is dropped
    pub fn set_color(&mut self, color: Color32) {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        self.options.color = Color32::from_rgb(r, g, b);
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.options.brush_width = self.config.clamp_brush_width(width);
    }

    pub fn set_fill(&mut self, fill: bool) {
        self.options.fill = fill;
    }

    /// Repaint the background over everything and drop any stroke in progress
    pub fn clear(&mut self) {
        self.state.finish();
        self.canvas.fill(self.config.background);
        log::info!("Canvas cleared");
    }

    /// Encode the canvas and save or download it under a timestamped name
    pub fn export(&self) -> Result<ExportedImage, ExportError> {
        export::save_canvas(&self.canvas, self.config.export_format, &self.config.export_dir)
    }
}

fn draw_shape(canvas: &mut PixelCanvas, shape: Shape, stroke: &ActiveStroke) {
    let ActiveStroke { color, line_width, fill, .. } = *stroke;
    match shape {
        Shape::Rectangle(rect) if fill => canvas.fill_rect(rect, color),
        Shape::Rectangle(rect) => canvas.stroke_rect(rect, line_width, color),
        Shape::Circle { center, radius } if fill => canvas.fill_circle(center, radius, color),
        Shape::Circle { center, radius } => canvas.stroke_circle(center, radius, line_width, color),
        Shape::Triangle(vertices) if fill => canvas.fill_polygon(&vertices, color),
        Shape::Triangle(vertices) => canvas.stroke_polygon(&vertices, line_width, color),
    }
}
