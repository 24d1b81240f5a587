use thiserror::Error;

/// Errors surfaced by the canvas editing core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// Pixel access outside the fixed canvas dimensions. Rejected, never
    /// clamped, so coordinate math bugs in shape rendering show up early.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    /// The load path produced an unusable source image
    #[error("invalid image source: {0}")]
    InvalidImageSource(String),
}
