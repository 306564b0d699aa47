use std::io::{self, Write};

use crate::renderer::Canvas;

/// Plain-text (P3) PPM writer.
///
/// Layout: `P3`, `<width> <height>`, `255`, then one line per canvas row with
/// every pixel written as `R G B ` (note the trailing space).
pub struct PpmEncoder<W: Write> {
    writer: W,
}

impl<W: Write> PpmEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_canvas(&mut self, canvas: &Canvas) -> io::Result<()> {
        let (width, height) = canvas.dimensions();
        let palette = canvas.palette();

        write!(self.writer, "P3\n{} {}\n255\n", width, height)?;

        for row in canvas.data().chunks(width) {
            for &pixel in row {
                let (r, g, b) = palette.get_rgb(pixel);
                write!(self.writer, "{} {} {} ", r, g, b)?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }
}
