use crate::config::CanvasConfig;
use crate::controller::DrawingController;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;

/// The drawing app: one controller, the texture that shows it, and the
/// pointer translation between them.
pub struct SketchApp {
    controller: DrawingController,
    renderer: Renderer,
    input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            controller: DrawingController::new(config),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
        }
    }

    pub fn controller(&self) -> &DrawingController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawingController {
        &mut self.controller
    }

    /// Size the pixel buffer to the canvas area on the first layout pass
    pub fn layout_canvas(&mut self, canvas_rect: egui::Rect) {
        if self.controller.is_laid_out() {
            return;
        }
        let width = canvas_rect.width().round().max(0.0) as u32;
        let height = canvas_rect.height().round().max(0.0) as u32;
        if width > 0 && height > 0 {
            self.controller.layout(width, height);
        }
    }

    /// Feed this frame's pointer input to the controller.
    ///
    /// `canvas` is the drawing area's response; its rect is the canvas origin.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        self.input.set_canvas_rect(canvas.rect);
        for event in self.input.process_input(ctx, canvas) {
            self.controller.handle_event(event);
        }
    }

    pub fn render_canvas(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
    ) {
        self.renderer
            .render(ctx, painter, canvas_rect, self.controller.canvas());
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panel first so the central panel gets the remaining space
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
