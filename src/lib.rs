#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;
pub mod util;

pub use app::SketchApp;
pub use config::CanvasConfig;
pub use controller::DrawingController;
pub use error::{AppError, ExportError};
pub use input::{ColorChoice, InputEvent};
pub use renderer::Renderer;
pub use state::{EditorState, ToolOptions};
pub use surface::PixelCanvas;
pub use tools::Tool;
