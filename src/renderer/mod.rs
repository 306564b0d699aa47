mod canvas;
mod colors;

pub use canvas::Canvas;
pub use colors::{Palette, PaletteEntry, DEFAULT_BACKGROUND};
