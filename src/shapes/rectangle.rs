use super::{validate, Point};
use crate::error::Result;
use crate::renderer::Canvas;

/// Axis-aligned filled rectangle between two inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub ll: Point,
    pub ur: Point,
    pub color: u8,
}

impl Rectangle {
    pub const NAME: &'static str = "Rectangle";

    pub fn new(ll: Point, ur: Point, color: u8) -> Self {
        Self { ll, ur, color }
    }

    /// Corners are not reordered: `ll` past `ur` on either axis fills nothing
    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        validate(Self::NAME, &[self.ll, self.ur], self.color, canvas)?;

        for x in self.ll.x..=self.ur.x {
            for y in self.ll.y..=self.ur.y {
                canvas.set_pixel(x, y, self.color)?;
            }
        }

        tracing::debug!(
            "Rectangle ({}, {})-({}, {}) color {}",
            self.ll.x, self.ll.y, self.ur.x, self.ur.y, self.color
        );
        Ok(())
    }
}
