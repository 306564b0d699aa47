use image::{ImageBuffer, Rgb};
use std::path::Path;

use crate::error::Result;
use crate::renderer::Canvas;

/// Save the canvas as an 8-bit RGB PNG, mapping ids through its palette
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let (width, height) = canvas.dimensions();
    let palette = canvas.palette();
    let data = canvas.data();

    let img = ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let (r, g, b) = palette.get_rgb(data[y as usize * width + x as usize]);
        Rgb([r, g, b])
    });

    img.save(path)?;
    tracing::info!("Exported {}x{} canvas to {}", width, height, path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Palette;

    #[test]
    fn test_png_pixels_follow_palette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");

        let mut canvas = Canvas::new(2, 2, &Palette::default()).unwrap();
        canvas.set_pixel(1, 1, 3).unwrap();
        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 0, 255]));
    }
}
