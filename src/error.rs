use thiserror::Error;

/// Errors that can occur while exporting the canvas as an image
#[derive(Error, Debug)]
pub enum ExportError {
    /// The canvas has not been laid out yet, so there are no pixels to encode
    #[error("Canvas is empty ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image file: {0}")]
    Io(#[from] std::io::Error),
    /// A browser API refused to cooperate while offering the download
    #[error("Browser download failed: {0}")]
    Web(String),
}

/// Errors that can stop the application from starting
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to start the native window: {0}")]
    Startup(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<eframe::Error> for AppError {
    fn from(error: eframe::Error) -> Self {
        AppError::Startup(error.to_string())
    }
}
