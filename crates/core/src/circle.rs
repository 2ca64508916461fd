//! Midpoint circle rasterization.
//!
//! Only the first octant (from the top of the circle, `0 <= x <= y`) is
//! computed by the integer recurrence; the remaining seven are reflections.

use crate::canvas::Canvas;
use crate::types::Point;

/// Reflect the first-octant offset `(x, y)` around `center` into all eight
/// octants.
///
/// Order: `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
/// Offsets on an axis or diagonal produce repeated points; they are kept.
/// A reflection that leaves `i32` space is `None`.
pub fn octant_reflections(center: Point, x: i32, y: i32) -> [Option<Point>; 8] {
    let (cx, cy) = (center.x as i64, center.y as i64);
    let (x, y) = (x as i64, y as i64);
    [
        point_at(cx + x, cy + y),
        point_at(cx - x, cy + y),
        point_at(cx + x, cy - y),
        point_at(cx - x, cy - y),
        point_at(cx + y, cy + x),
        point_at(cx - y, cy + x),
        point_at(cx + y, cy - x),
        point_at(cx - y, cy - x),
    ]
}

fn point_at(x: i64, y: i64) -> Option<Point> {
    Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// First-octant offsets of a circle of radius `r`, as `(x, y)` pairs.
///
/// Empty when `r <= 0`.
#[derive(Debug, Clone)]
pub struct CircleOffsets {
    x: i64,
    y: i64,
    d: i64,
}

impl CircleOffsets {
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            // x > y terminates immediately.
            return Self { x: 1, y: 0, d: 0 };
        }
        Self {
            x: 0,
            y: radius as i64,
            d: 1 - radius as i64,
        }
    }
}

impl Iterator for CircleOffsets {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > self.y {
            return None;
        }
        // 0 <= x <= y <= radius, so both fit back into i32.
        let offset = (self.x as i32, self.y as i32);
        if self.d < 0 {
            self.d += 2 * self.x + 3;
        } else {
            self.d += 2 * (self.x - self.y) + 5;
            self.y -= 1;
        }
        self.x += 1;
        Some(offset)
    }
}

impl std::iter::FusedIterator for CircleOffsets {}

pub fn circle_offsets(radius: i32) -> CircleOffsets {
    CircleOffsets::new(radius)
}

/// Every pixel plotted for the circle, eight per offset, duplicates included.
///
/// Reflections outside `i32` space are skipped; no canvas could show them.
pub fn circle_points(center: Point, radius: i32) -> impl Iterator<Item = Point> {
    circle_offsets(radius)
        .flat_map(move |(x, y)| octant_reflections(center, x, y))
        .flatten()
}

/// Draw the outline of a circle. No-op when `radius <= 0`.
pub fn draw_circle(canvas: &mut Canvas, center: Point, radius: i32, ch: char) {
    for p in circle_points(center, radius) {
        canvas.set_pixel(p.x, p.y, ch);
    }
}
