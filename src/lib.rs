#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod segment;
pub mod stroke;
pub mod surface;

pub use app::PaintApp;
pub use brush::BrushState;
pub use command::{Command, CommandHistory};
pub use config::CanvasConfig;
pub use controller::DrawingController;
pub use error::{ConfigError, ConfigResult};
pub use input::{InputHandler, PointerEvent};
pub use segment::{Point, Segment, SegmentId, SegmentRef};
pub use stroke::StrokeAccumulator;
pub use surface::{Canvas, RenderSurface};
