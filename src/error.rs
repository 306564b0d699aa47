use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the canvas, the palette and the shape rasterizers
#[derive(Error, Debug)]
pub enum DrawError {
    /// A point that defines the shape's extent lies outside the canvas
    #[error("{shape} geometry out of bounds at ({x}, {y})")]
    OutOfBoundsGeometry { shape: &'static str, x: i32, y: i32 },

    /// Color id is not present in the palette
    #[error("unknown color: {0}")]
    UnknownColor(u8),

    /// Direct pixel access outside the grid
    #[error("pixel out of bounds at ({x}, {y})")]
    PixelOutOfBounds { x: i32, y: i32 },

    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("duplicate color id in palette: {0}")]
    DuplicateColor(u8),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DrawError>;
