use super::{validate, Point};
use crate::error::Result;
use crate::renderer::Canvas;

/// Filled disk around an integer center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub color: u8,
}

impl Circle {
    pub const NAME: &'static str = "Circle";

    pub fn new(center: Point, radius: i32, color: u8) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Brute-force membership test over the bounding square.
    ///
    /// Only the center is bounds-checked; pixels of the disk that fall off
    /// the canvas are dropped.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        validate(Self::NAME, &[self.center], self.color, canvas)?;

        let r = self.radius as i64;
        let (x0, y0) = (self.center.x as i64, self.center.y as i64);
        let mut clipped = 0usize;

        for dx in -r..=r {
            for dy in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (x0 + dx, y0 + dy);
                let in_range = i32::try_from(x).is_ok() && i32::try_from(y).is_ok();
                if !in_range || canvas.set_pixel(x as i32, y as i32, self.color).is_err() {
                    clipped += 1;
                }
            }
        }

        tracing::debug!(
            "Circle ({}, {}) r={} color {} ({} pixels clipped)",
            self.center.x, self.center.y, self.radius, self.color, clipped
        );
        Ok(())
    }
}
