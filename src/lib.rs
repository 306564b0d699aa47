//! Rasterize rectangles, circles and triangles onto an indexed-color canvas
//! and export the result as a plain-text PPM image.

pub mod encoder;
pub mod error;
pub mod renderer;
pub mod scene;
pub mod shapes;

pub use error::DrawError;
pub use renderer::{Canvas, Palette, PaletteEntry};
pub use shapes::{Circle, Point, Rectangle, Shape, Triangle};
