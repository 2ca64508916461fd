//! Closed polygon outlines built from line segments.

use crate::canvas::Canvas;
use crate::line::draw_line;
use crate::types::Point;

/// Edges of the closed polygon through `vertices`, in order.
///
/// Vertex `i` connects to vertex `(i + 1) % n`. Fewer than two vertices give
/// no edges, and two vertices give a single edge rather than the same segment
/// twice.
pub fn polygon_edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    let edge_count = match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    };
    (0..edge_count).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Draw the outline of the polygon. No fill, no deduplication of overlaps.
pub fn draw_polygon(canvas: &mut Canvas, vertices: &[Point], ch: char) {
    for (from, to) in polygon_edges(vertices) {
        draw_line(canvas, from, to, ch);
    }
}

pub fn draw_triangle(canvas: &mut Canvas, vertices: [Point; 3], ch: char) {
    draw_polygon(canvas, &vertices, ch);
}
