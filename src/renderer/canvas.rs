use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::Palette;
use crate::encoder::PpmEncoder;
use crate::error::{DrawError, Result};
use crate::shapes::Point;

/// Indexed-color pixel grid that shapes draw onto
#[derive(Debug, Clone)]
pub struct Canvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl Canvas {
    pub fn new(width: usize, height: usize, palette: &Palette) -> Result<Self> {
        let invalid = DrawError::InvalidDimensions { width, height };

        // Each side must also fit the u32 the image encoders take
        if width == 0 || height == 0 || u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return Err(invalid);
        }
        let area = width.checked_mul(height).ok_or(invalid)?;

        let mut canvas = Self {
            data: vec![0; area],
            width,
            height,
            palette: palette.clone(),
        };
        canvas.clear();
        Ok(canvas)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> u8 {
        self.palette.background()
    }

    /// Row-major color ids, `y * width + x`
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point.x, point.y).is_some()
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) -> Result<()> {
        let idx = self
            .index(x, y)
            .ok_or(DrawError::PixelOutOfBounds { x, y })?;
        self.data[idx] = color;
        Ok(())
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u8> {
        self.index(x, y)
            .map(|idx| self.data[idx])
            .ok_or(DrawError::PixelOutOfBounds { x, y })
    }

    pub fn clear(&mut self) {
        let background = self.palette.background();
        self.data.fill(background);
    }

    /// Write the canvas as a P3 image to `<name>.ppm` and return that path
    pub fn export(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        let path = ppm_path(name.as_ref());

        let io_err = |source: std::io::Error| DrawError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        self.write_ppm(&mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        tracing::info!("Exported {}x{} canvas to {}", self.width, self.height, path.display());
        Ok(path)
    }

    /// Stream the P3 encoding of the canvas into any writer
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        PpmEncoder::new(writer).write_canvas(self)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

/// Appends the extension so names like `out.v1` keep their dot
fn ppm_path(name: &Path) -> PathBuf {
    let mut path = OsString::from(name.as_os_str());
    path.push(".ppm");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: usize, height: usize) -> Canvas {
        Canvas::new(width, height, &Palette::default()).unwrap()
    }

    #[test]
    fn test_new_is_cleared_to_background() {
        let c = canvas(7, 4);
        assert_eq!(c.dimensions(), (7, 4));
        assert!(c.data().iter().all(|&p| p == 9));
        for y in 0..4 {
            for x in 0..7 {
                assert_eq!(c.get_pixel(x, y).unwrap(), 9);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let palette = Palette::default();
        assert!(matches!(
            Canvas::new(0, 5, &palette),
            Err(DrawError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Canvas::new(5, 0, &palette).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let palette = Palette::default();
        assert!(matches!(
            Canvas::new(usize::MAX, 2, &palette),
            Err(DrawError::InvalidDimensions { height: 2, .. })
        ));
        assert!(matches!(
            Canvas::new(2, usize::MAX, &palette),
            Err(DrawError::InvalidDimensions { width: 2, .. })
        ));

        #[cfg(target_pointer_width = "64")]
        {
            let too_wide = u32::MAX as usize + 1;
            assert!(matches!(
                Canvas::new(too_wide, 1, &palette),
                Err(DrawError::InvalidDimensions { height: 1, .. })
            ));
            assert!(Canvas::new(1, too_wide, &palette).is_err());
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut c = canvas(10, 10);
        c.set_pixel(3, 7, 2).unwrap();
        assert_eq!(c.get_pixel(3, 7).unwrap(), 2);
        // Row-major: (3, 7) must not alias (7, 3)
        assert_eq!(c.get_pixel(7, 3).unwrap(), 9);
        assert_eq!(c.data()[7 * 10 + 3], 2);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut c = canvas(4, 3);
        let before = c.data().to_vec();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MAX, i32::MAX)] {
            assert!(matches!(
                c.set_pixel(x, y, 1),
                Err(DrawError::PixelOutOfBounds { .. })
            ));
            assert!(c.get_pixel(x, y).is_err());
        }
        assert_eq!(c.data(), &before[..]);
    }

    #[test]
    fn test_clear() {
        let mut c = canvas(3, 3);
        c.set_pixel(0, 0, 1).unwrap();
        c.set_pixel(2, 2, 4).unwrap();
        c.clear();
        assert!(c.data().iter().all(|&p| p == c.background()));
    }

    #[test]
    fn test_contains() {
        let c = canvas(5, 5);
        assert!(c.contains(Point::new(0, 0)));
        assert!(c.contains(Point::new(4, 4)));
        assert!(!c.contains(Point::new(5, 0)));
        assert!(!c.contains(Point::new(0, -1)));
    }

    #[test]
    fn test_write_ppm_cleared_2x1() {
        let c = canvas(2, 1);
        let mut out = Vec::new();
        c.write_ppm(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 1\n255\n255 255 255 255 255 255 \n"
        );
    }

    #[test]
    fn test_export_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let c = canvas(2, 1);

        let path = c.export(dir.path().join("shot.v1")).unwrap();
        assert_eq!(path, dir.path().join("shot.v1.ppm"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255 255 255 255 \n");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let c = canvas(2, 2);
        let result = c.export(dir.path().join("missing").join("shot"));
        assert!(matches!(result, Err(DrawError::Io { .. })));
    }
}
