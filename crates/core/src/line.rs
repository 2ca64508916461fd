//! Bresenham line rasterization.
//!
//! The iterator walks the major axis one cell at a time and carries an integer
//! error term for the minor axis, so a segment always covers exactly
//! `max(|dx|, |dy|) + 1` cells with no gaps. Endpoints are normalized before
//! stepping, which makes the pixel set independent of argument order.

use crate::canvas::Canvas;
use crate::types::Point;

/// Lazy sequence of the pixels on the segment between two points.
///
/// Points are yielded in increasing major-axis order, endpoints included.
#[derive(Debug, Clone)]
pub struct LinePoints {
    steep: bool,
    x: i64,
    x_end: i64,
    y: i64,
    y_step: i64,
    dx: i64,
    dy: i64,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(from: Point, to: Point) -> Self {
        let (mut x0, mut y0) = (from.x as i64, from.y as i64);
        let (mut x1, mut y1) = (to.x as i64, to.y as i64);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        // dx >= 0 here, so truncating and flooring division agree.
        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        Self {
            steep,
            x: x0,
            x_end: x1,
            y: y0,
            y_step: if y0 < y1 { 1 } else { -1 },
            dx,
            dy,
            err: dx / 2,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.x_end - self.x + 1) as usize
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let point = if self.steep {
            Point::new(self.y as i32, self.x as i32)
        } else {
            Point::new(self.x as i32, self.y as i32)
        };

        if self.x == self.x_end {
            self.done = true;
            return Some(point);
        }

        self.err -= self.dy;
        if self.err < 0 {
            self.y += self.y_step;
            self.err += self.dx;
        }
        self.x += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl std::iter::FusedIterator for LinePoints {}

/// Pixels of the segment `from..=to`.
pub fn line_points(from: Point, to: Point) -> LinePoints {
    LinePoints::new(from, to)
}

/// Draw the segment `from..=to` with `ch`. Off-canvas pixels are clipped.
pub fn draw_line(canvas: &mut Canvas, from: Point, to: Point, ch: char) {
    for p in line_points(from, to) {
        canvas.set_pixel(p.x, p.y, ch);
    }
}
