use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use crate::error::ExportError;
use crate::surface::PixelCanvas;
use crate::util::time;

pub const JPEG_QUALITY: u8 = 90;

/// Raster formats the canvas can be saved as
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Jpeg,
    Png,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Png => "png",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Png => "image/png",
        }
    }
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub size_bytes: usize,
}

/// File name for an export taken at the given time, e.g. `1700000000000.jpg`
pub fn export_file_name(timestamp_millis: u64, format: ExportFormat) -> String {
    format!("{}.{}", timestamp_millis, format.extension())
}

/// Encode the canvas pixels in the given format
pub fn encode(canvas: &PixelCanvas, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    if canvas.is_empty() {
        return Err(ExportError::EmptyCanvas {
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    let mut bytes = Vec::new();
    match format {
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(canvas.image().clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).encode_image(&rgb)?;
        }
        ExportFormat::Png => {
            canvas
                .image()
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
    }

    log::debug!(
        "Encoded {}x{} canvas as {} ({} bytes)",
        canvas.width(),
        canvas.height(),
        format.extension(),
        bytes.len()
    );
    Ok(bytes)
}

/// Encode the canvas and hand it to the platform as a timestamped file.
///
/// Native builds write into `export_dir`; web builds offer a download and
/// ignore the directory.
pub fn save_canvas(
    canvas: &PixelCanvas,
    format: ExportFormat,
    export_dir: &Path,
) -> Result<ExportedImage, ExportError> {
    let bytes = encode(canvas, format)?;
    let file_name = export_file_name(time::timestamp_millis(), format);
    deliver(&bytes, &file_name, format, export_dir)?;

    log::info!("Exported canvas as {}", file_name);
    Ok(ExportedImage {
        file_name,
        size_bytes: bytes.len(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver(
    bytes: &[u8],
    file_name: &str,
    _format: ExportFormat,
    export_dir: &Path,
) -> Result<(), ExportError> {
    let path = export_dir.join(file_name);
    std::fs::write(&path, bytes)?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn deliver(
    bytes: &[u8],
    file_name: &str,
    format: ExportFormat,
    _export_dir: &Path,
) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn js_error(value: JsValue) -> ExportError {
        ExportError::Web(format!("{:?}", value))
    }

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(format.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Web("No document".to_owned()))?;
    let link = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Web("Created element is not an anchor".to_owned()))?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_file_name_uses_timestamp() {
        assert_eq!(export_file_name(1_700_000_000_123, ExportFormat::Jpeg), "1700000000123.jpg");
        assert_eq!(export_file_name(42, ExportFormat::Png), "42.png");
    }

    #[test]
    fn test_empty_canvas_cannot_be_encoded() {
        let result = encode(&PixelCanvas::empty(), ExportFormat::Png);
        assert!(matches!(result, Err(ExportError::EmptyCanvas { width: 0, height: 0 })));
    }

    #[test]
    fn test_png_preserves_pixels() {
        let mut canvas = PixelCanvas::new(8, 6, Color32::WHITE);
        canvas.fill_rect(
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(4.0, 6.0)),
            Color32::RED,
        );
        let bytes = encode(&canvas, ExportFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 6));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(6, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_jpeg_keeps_dimensions() {
        let canvas = PixelCanvas::new(32, 16, Color32::WHITE);
        let bytes = encode(&canvas, ExportFormat::Jpeg).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }
}
