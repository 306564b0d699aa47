mod png_encoder;
mod ppm_encoder;

pub use png_encoder::write_png;
pub use ppm_encoder::PpmEncoder;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::renderer::Canvas;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ppm" | "p3" => Some(OutputFormat::Ppm),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }

    /// Write `canvas` under `name` plus this format's extension
    pub fn save(&self, canvas: &Canvas, name: &Path) -> Result<PathBuf> {
        match self {
            OutputFormat::Ppm => canvas.export(name),
            OutputFormat::Png => {
                let mut path = name.as_os_str().to_owned();
                path.push(".png");
                let path = PathBuf::from(path);
                write_png(canvas, &path)?;
                Ok(path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Palette;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.ppm")), Some(OutputFormat::Ppm));
        assert_eq!(OutputFormat::from_path(Path::new("b.PNG")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("b.gif")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_save_png_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::new(3, 2, &Palette::default()).unwrap();

        let path = OutputFormat::Png.save(&canvas, &dir.path().join("out")).unwrap();
        assert_eq!(path, dir.path().join("out.png"));
        assert!(path.exists());
    }
}
