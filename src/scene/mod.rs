use serde::{Deserialize, Serialize};
use anyhow::{Result, Context};
use std::path::{Path, PathBuf};
use std::fs;

use crate::renderer::{Canvas, Palette, PaletteEntry, DEFAULT_BACKGROUND};
use crate::shapes::{Circle, Point, Rectangle, Shape, Triangle};

/// File extensions tried, in order, when looking a scene up by name
const SCENE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// First `<dir>/<name>.<ext>` that exists, directories in priority order
fn find_scene_file(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| SCENE_EXTENSIONS.iter().map(move |ext| dir.join(format!("{}.{}", name, ext))))
        .find(|path| path.is_file())
}

/// A drawing: canvas size, optional palette and the shapes to rasterize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,

    pub width: usize,

    pub height: usize,

    #[serde(default)]
    pub background: Option<ColorRef>,

    /// Replaces the reference palette when present
    #[serde(default)]
    pub palette: Option<Vec<PaletteEntry>>,

    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle {
        ll: Point,
        ur: Point,
        color: ColorRef,
    },
    Circle {
        center: Point,
        radius: i32,
        color: ColorRef,
    },
    Triangle {
        points: [Point; 3],
        color: ColorRef,
    },
}

/// Color given either as a palette id or as a palette name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorRef {
    Id(u8),
    Name(String),
}

impl ColorRef {
    /// Names must exist in `palette`; ids pass through unchecked so the
    /// draw itself reports unknown ones.
    pub fn resolve(&self, palette: &Palette) -> Result<u8> {
        match self {
            ColorRef::Id(id) => Ok(*id),
            ColorRef::Name(name) => palette
                .id_for_name(name)
                .with_context(|| format!("Unknown color name '{}'", name)),
        }
    }
}

impl<'de> Deserialize<'de> for ColorRef {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        struct ColorRefVisitor;

        impl<'de> serde::de::Visitor<'de> for ColorRefVisitor {
            type Value = ColorRef;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a color id (0-255) or a color name")
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<ColorRef, E>
            where
                E: Error,
            {
                u8::try_from(value)
                    .map(ColorRef::Id)
                    .map_err(|_| E::custom(format!("color id {} out of range", value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<ColorRef, E>
            where
                E: Error,
            {
                u8::try_from(value)
                    .map(ColorRef::Id)
                    .map_err(|_| E::custom(format!("color id {} out of range", value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<ColorRef, E>
            where
                E: Error,
            {
                Ok(ColorRef::Name(value.to_string()))
            }
        }

        deserializer.deserialize_any(ColorRefVisitor)
    }
}

impl Serialize for ColorRef {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ColorRef::Id(id) => serializer.serialize_u8(*id),
            ColorRef::Name(name) => serializer.serialize_str(name),
        }
    }
}

impl ShapeSpec {
    pub fn to_shape(&self, palette: &Palette) -> Result<Shape> {
        let shape = match self {
            ShapeSpec::Rectangle { ll, ur, color } => {
                Rectangle::new(*ll, *ur, color.resolve(palette)?).into()
            }
            ShapeSpec::Circle { center, radius, color } => {
                Circle::new(*center, *radius, color.resolve(palette)?).into()
            }
            ShapeSpec::Triangle { points, color } => {
                let [p0, p1, p2] = *points;
                Triangle::new(p0, p1, p2, color.resolve(palette)?).into()
            }
        };
        Ok(shape)
    }
}

/// A shape the canvas refused
#[derive(Debug, Clone)]
pub struct Rejected {
    pub index: usize,
    pub shape: &'static str,
    pub reason: String,
}

/// Outcome of drawing a scene
#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    pub drawn: usize,
    pub rejected: Vec<Rejected>,
}

impl Scene {
    /// Load scene from filesystem path (JSON when the extension says so, YAML otherwise)
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let scene: Scene = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse scene JSON: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse scene YAML: {}", path.display()))?
        };

        Ok(scene)
    }

    /// Load scene by name: builtin scenes first, then scene directories
    pub fn load_by_name(name: &str) -> Result<Self> {
        if let Ok(scene) = Self::load_builtin(name) {
            return Ok(scene);
        }

        let dirs = Self::scene_dirs();
        match find_scene_file(&dirs, name) {
            Some(path) => Self::load(&path),
            None => anyhow::bail!(
                "Scene '{}' is not builtin and has no {} file in: {}",
                name,
                SCENE_EXTENSIONS.join("/"),
                dirs.iter().map(|d| d.display().to_string()).collect::<Vec<_>>().join(", ")
            ),
        }
    }

    /// Treat `arg` as a file when one exists there, otherwise as a scene name
    pub fn resolve(arg: &str) -> Result<Self> {
        let path = Path::new(arg);
        if path.is_file() {
            Self::load(path)
        } else {
            Self::load_by_name(arg)
        }
    }

    /// `./scenes`, then the per-user data directory
    fn scene_dirs() -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from("scenes")];
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "ppmdraw") {
            dirs.push(proj_dirs.data_dir().join("scenes"));
        }
        dirs
    }

    /// Load embedded builtin scene
    pub fn load_builtin(name: &str) -> Result<Self> {
        let yaml = match name {
            "demo" => include_str!("../../scenes/demo.yaml"),
            "checks" => include_str!("../../scenes/checks.yaml"),
            _ => anyhow::bail!("Unknown builtin scene: {}. Available scenes: demo, checks", name),
        };

        let scene: Scene = serde_yaml::from_str(yaml)
            .with_context(|| format!("Failed to parse embedded scene: {}", name))?;

        Ok(scene)
    }

    /// Palette the scene draws with, background applied
    pub fn palette(&self) -> Result<Palette> {
        let base = match &self.palette {
            Some(entries) => {
                // White's slot when the table has one, else its highest id
                let background = if entries.iter().any(|e| e.id == DEFAULT_BACKGROUND) {
                    DEFAULT_BACKGROUND
                } else {
                    entries
                        .iter()
                        .map(|e| e.id)
                        .max()
                        .context("Scene palette has no entries")?
                };
                Palette::from_entries(entries.clone(), background)
                    .with_context(|| format!("Invalid palette in scene '{}'", self.name))?
            }
            None => Palette::default(),
        };

        match &self.background {
            Some(color) => {
                let id = color.resolve(&base)?;
                base.with_background(id)
                    .with_context(|| format!("Invalid background for scene '{}'", self.name))
            }
            None => Ok(base),
        }
    }

    pub fn shapes(&self, palette: &Palette) -> Result<Vec<Shape>> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                spec.to_shape(palette)
                    .with_context(|| format!("Shape #{} in scene '{}'", i, self.name))
            })
            .collect()
    }

    /// Draw every shape onto a fresh canvas.
    ///
    /// Rejected shapes are logged and skipped, unless `strict` is set, in
    /// which case the first rejection aborts the render.
    pub fn render(&self, strict: bool) -> Result<(Canvas, RenderReport)> {
        let palette = self.palette()?;
        let shapes = self.shapes(&palette)?;
        let mut canvas = Canvas::new(self.width, self.height, &palette)
            .with_context(|| format!("Cannot create canvas for scene '{}'", self.name))?;

        tracing::info!(
            "Rendering scene '{}' ({}x{}, {} shapes)",
            self.name, self.width, self.height, shapes.len()
        );

        let mut report = RenderReport::default();
        for (index, shape) in shapes.iter().enumerate() {
            match shape.draw(&mut canvas) {
                Ok(()) => report.drawn += 1,
                Err(e) if strict => {
                    return Err(anyhow::Error::new(e)
                        .context(format!("{} #{} rejected", shape.type_name(), index)));
                }
                Err(e) => {
                    tracing::warn!("Skipping {} #{}: {}", shape.type_name(), index, e);
                    report.rejected.push(Rejected {
                        index,
                        shape: shape.type_name(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok((canvas, report))
    }
}
