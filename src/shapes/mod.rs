mod circle;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};
use crate::renderer::Canvas;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Drawable primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape {
    /// Validate against `canvas` and rasterize.
    ///
    /// A shape that fails validation leaves the canvas untouched.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        match self {
            Shape::Rectangle(rect) => rect.draw(canvas),
            Shape::Circle(circ) => circ.draw(canvas),
            Shape::Triangle(tri) => tri.draw(canvas),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => Rectangle::NAME,
            Shape::Circle(_) => Circle::NAME,
            Shape::Triangle(_) => Triangle::NAME,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circ: Circle) -> Self {
        Shape::Circle(circ)
    }
}

impl From<Triangle> for Shape {
    fn from(tri: Triangle) -> Self {
        Shape::Triangle(tri)
    }
}

/// Bounds check on the defining points, then the palette check.
fn validate(shape: &'static str, points: &[Point], color: u8, canvas: &Canvas) -> Result<()> {
    if let Some(p) = points.iter().find(|p| !canvas.contains(**p)) {
        return Err(DrawError::OutOfBoundsGeometry {
            shape,
            x: p.x,
            y: p.y,
        });
    }

    if !canvas.palette().contains(color) {
        return Err(DrawError::UnknownColor(color));
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::renderer::{Canvas, Palette};

    pub fn canvas10() -> Canvas {
        Canvas::new(10, 10, &Palette::default()).unwrap()
    }

    /// Every (x, y) holding `color`, in row-major order
    pub fn pixels_with(canvas: &Canvas, color: u8) -> Vec<(i32, i32)> {
        let width = canvas.width();
        canvas
            .data()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == color)
            .map(|(i, _)| ((i % width) as i32, (i / width) as i32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use super::*;

    #[test]
    fn test_type_names() {
        let rect: Shape = Rectangle::new(Point::new(0, 0), Point::new(1, 1), 1).into();
        let circ: Shape = Circle::new(Point::new(0, 0), 1, 1).into();
        let tri: Shape = Triangle::new(Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), 1).into();
        assert_eq!(rect.type_name(), "Rectangle");
        assert_eq!(circ.type_name(), "Circle");
        assert_eq!(tri.type_name(), "Triangle");
    }

    #[test]
    fn test_shapes_share_one_canvas() {
        let mut canvas = canvas10();
        let shapes: Vec<Shape> = vec![
            Rectangle::new(Point::new(0, 0), Point::new(9, 9), 8).into(),
            Circle::new(Point::new(5, 5), 1, 2).into(),
            Triangle::new(Point::new(0, 0), Point::new(2, 0), Point::new(0, 2), 3).into(),
        ];
        for shape in &shapes {
            shape.draw(&mut canvas).unwrap();
        }

        assert_eq!(canvas.get_pixel(9, 9).unwrap(), 8);
        assert_eq!(canvas.get_pixel(5, 5).unwrap(), 2);
        assert_eq!(canvas.get_pixel(0, 0).unwrap(), 3);
        assert!(pixels_with(&canvas, 9).is_empty());
    }

    #[test]
    fn test_bounds_checked_before_color() {
        let mut canvas = canvas10();
        let shape: Shape = Rectangle::new(Point::new(-1, 0), Point::new(2, 2), 77).into();
        assert!(matches!(
            shape.draw(&mut canvas),
            Err(DrawError::OutOfBoundsGeometry { shape: "Rectangle", x: -1, y: 0 })
        ));
    }

    #[test]
    fn test_point_serde_as_pair() {
        let p: Point = serde_yaml::from_str("[3, -4]").unwrap();
        assert_eq!(p, Point::new(3, -4));
    }
}
