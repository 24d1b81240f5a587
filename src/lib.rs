#![warn(clippy::all, rust_2018_idioms)]

pub mod controller;
pub mod error;
pub mod fill;
pub mod history;
pub mod import;
pub mod input;
pub mod raster;
pub mod shapes;
pub mod text;
pub mod tools;

pub use controller::{BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, CanvasController, EditOutcome};
pub use error::PaintError;
pub use fill::flood_fill;
pub use history::{HISTORY_CAPACITY, SnapshotHistory};
pub use import::fit_to_canvas;
pub use input::PointerEvent;
pub use raster::{RasterBuffer, Snapshot};
pub use shapes::{ShapeKind, StrokeSegment};
pub use tools::{Tool, ToolState};
