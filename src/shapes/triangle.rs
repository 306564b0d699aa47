use super::{validate, Point};
use crate::error::Result;
use crate::renderer::Canvas;

/// Filled triangle, rasterized one row at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub points: [Point; 3],
    pub color: u8,
}

impl Triangle {
    pub const NAME: &'static str = "Triangle";

    pub fn new(p0: Point, p1: Point, p2: Point, color: u8) -> Self {
        Self {
            points: [p0, p1, p2],
            color,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        validate(Self::NAME, &self.points, self.color, canvas)?;

        let [p0, p1, p2] = sort_by_y(self.points);

        if p0.y == p2.y {
            // Every vertex on one row: fill the span all three cover
            let lo = p0.x.min(p1.x).min(p2.x);
            let hi = p0.x.max(p1.x).max(p2.x);
            for x in lo..=hi {
                canvas.set_pixel(x, p0.y, self.color)?;
            }
        } else {
            let (x_left, x_right) = scan_edges(p0, p1, p2);

            for y in p0.y..=p2.y {
                let row = (y - p0.y) as usize;
                for x in x_left[row]..=x_right[row] {
                    canvas.set_pixel(x, y, self.color)?;
                }
            }
        }

        tracing::debug!(
            "Triangle ({}, {}) ({}, {}) ({}, {}) color {}",
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, self.color
        );
        Ok(())
    }
}

/// Order vertices by ascending y with three strict compare-and-swaps
fn sort_by_y(mut p: [Point; 3]) -> [Point; 3] {
    if p[1].y < p[0].y {
        p.swap(0, 1);
    }
    if p[2].y < p[0].y {
        p.swap(0, 2);
    }
    if p[2].y < p[1].y {
        p.swap(1, 2);
    }
    p
}

/// Left and right x boundaries for each row from `p0.y` to `p2.y`.
///
/// Which side is left is decided once, at the middle row.
fn scan_edges(p0: Point, p1: Point, p2: Point) -> (Vec<i32>, Vec<i32>) {
    let mut short = interpolate(p0.y, p0.x, p1.y, p1.x);
    short.pop();
    short.extend(interpolate(p1.y, p1.x, p2.y, p2.x));

    let long = interpolate(p0.y, p0.x, p2.y, p2.x);

    let m = short.len() / 2;
    if long[m] < short[m] {
        (long, short)
    } else {
        (short, long)
    }
}

/// One dependent value per integer step of `i0..=i1`, truncated toward zero.
///
/// A zero-length range yields the single value `d0`.
fn interpolate(i0: i32, d0: i32, i1: i32, d1: i32) -> Vec<i32> {
    if i0 == i1 {
        return vec![d0];
    }

    let slope = (d1 - d0) as f64 / (i1 - i0) as f64;
    (i0..=i1)
        .map(|i| (d0 as f64 + slope * (i - i0) as f64) as i32)
        .collect()
}
