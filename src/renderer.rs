// src/renderer.rs
use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

use crate::surface::PixelCanvas;

/// Keeps an egui texture in sync with the pixel canvas and paints it
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Canvas version the texture was last uploaded from
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload the canvas if it changed since the last frame.
    ///
    /// Returns true when a new upload happened.
    pub fn sync(&mut self, ctx: &egui::Context, canvas: &PixelCanvas) -> bool {
        if canvas.is_empty() || self.uploaded_version == Some(canvas.version()) {
            return false;
        }

        let image = to_color_image(canvas);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(canvas.version());
        true
    }

    /// Renders the canvas into `rect` at one texel per point
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context for the current frame
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Where the canvas sits on screen
    ///     canvas (PixelCanvas): The pixels to show
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        canvas: &PixelCanvas,
    ) {
        self.sync(ctx, canvas);

        let Some(texture) = &self.texture else {
            return;
        };
        let [width, height] = canvas.size();
        let image_rect = egui::Rect::from_min_size(rect.min, egui::vec2(width as f32, height as f32));
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), image_rect, uv, Color32::WHITE);
    }

    pub fn uploaded_version(&self) -> Option<u64> {
        self.uploaded_version
    }
}

fn to_color_image(canvas: &PixelCanvas) -> egui::ColorImage {
    let [width, height] = canvas.size();
    egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        canvas.image().as_raw(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_canvas_is_not_uploaded() {
        let mut renderer = Renderer::new();
        let ctx = egui::Context::default();
        assert!(!renderer.sync(&ctx, &PixelCanvas::empty()));
        assert_eq!(renderer.uploaded_version(), None);
    }

    #[test]
    fn test_upload_only_on_change() {
        let mut renderer = Renderer::new();
        let ctx = egui::Context::default();
        let mut canvas = PixelCanvas::new(16, 16, Color32::WHITE);

        assert!(renderer.sync(&ctx, &canvas));
        assert!(!renderer.sync(&ctx, &canvas));

        canvas.fill(Color32::BLACK);
        assert!(renderer.sync(&ctx, &canvas));
        assert_eq!(renderer.uploaded_version(), Some(canvas.version()));
    }

    #[test]
    fn test_render_basics() {
        let mut renderer = Renderer::new();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);
        let canvas = PixelCanvas::new(100, 100, Color32::WHITE);

        renderer.render(&ctx, &painter, rect, &canvas);
        assert!(renderer.uploaded_version().is_some());
    }
}
