//! Circle rasterizer tests - distance bound, symmetry, small radii

use std::collections::BTreeSet;

use tui_raster::core::{circle_points, draw_circle, octant_reflections, Canvas};
use tui_raster::types::Point;

fn pixel_set(center: Point, r: i32) -> BTreeSet<Point> {
    circle_points(center, r).collect()
}

#[test]
fn test_circle_pixels_lie_near_radius() {
    let center = Point::new(3, -2);
    for r in 1..=40 {
        for p in pixel_set(center, r) {
            let dx = (p.x - center.x) as f64;
            let dy = (p.y - center.y) as f64;
            let dist = (dx * dx + dy * dy).sqrt().round() as i32;
            assert!(
                (dist - r).abs() <= 1,
                "r={} pixel {:?} at distance {}",
                r,
                p,
                dist
            );
        }
    }
}

#[test]
fn test_circle_is_symmetric() {
    let c = Point::new(10, 7);
    for r in 1..=25 {
        let set = pixel_set(c, r);
        for p in &set {
            let (dx, dy) = (p.x - c.x, p.y - c.y);
            for mirrored in [
                Point::new(c.x - dx, c.y + dy),
                Point::new(c.x + dx, c.y - dy),
                Point::new(c.x - dx, c.y - dy),
                Point::new(c.x + dy, c.y + dx),
            ] {
                assert!(set.contains(&mirrored), "r={} missing {:?}", r, mirrored);
            }
        }
    }
}

#[test]
fn test_non_positive_radius_plots_nothing() {
    let mut canvas = Canvas::new(10, 10, ' ').unwrap();
    draw_circle(&mut canvas, Point::new(5, 5), 0, 'o');
    draw_circle(&mut canvas, Point::new(5, 5), -4, 'o');
    assert_eq!(canvas.count_set(), 0);
}

#[test]
fn test_small_circle_extremes() {
    // drawCircle(5,2,2,'o') on 10x5
    let mut canvas = Canvas::new(10, 5, ' ').unwrap();
    draw_circle(&mut canvas, Point::new(5, 2), 2, 'o');

    assert_eq!(canvas.get(5, 0), Some('o'));
    assert_eq!(canvas.get(5, 4), Some('o'));
    assert_eq!(canvas.get(3, 2), Some('o'));
    assert_eq!(canvas.get(7, 2), Some('o'));
    // The centre stays empty.
    assert_eq!(canvas.get(5, 2), Some(' '));
}

#[test]
fn test_radius_two_exact_ring() {
    let mut canvas = Canvas::new(5, 5, '.').unwrap();
    draw_circle(&mut canvas, Point::new(2, 2), 2, 'o');
    assert_eq!(
        canvas.render(),
        ".ooo.\no...o\no...o\no...o\n.ooo.\n"
    );
}

#[test]
fn test_radius_three_exact_ring() {
    let mut canvas = Canvas::new(7, 7, '.').unwrap();
    draw_circle(&mut canvas, Point::new(3, 3), 3, 'o');
    assert_eq!(
        canvas.render(),
        concat!(
            "..ooo..\n",
            ".o...o.\n",
            "o.....o\n",
            "o.....o\n",
            "o.....o\n",
            ".o...o.\n",
            "..ooo..\n",
        )
    );
}

#[test]
fn test_reflections_are_pure() {
    let a = octant_reflections(Point::new(0, 0), 2, 5);
    let b = octant_reflections(Point::new(0, 0), 2, 5);
    assert_eq!(a, b);
    let set: BTreeSet<Point> = a.into_iter().flatten().collect();
    assert_eq!(set.len(), 8);

    // On the diagonal, pairs coincide.
    let diag: BTreeSet<Point> = octant_reflections(Point::new(0, 0), 3, 3)
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(diag.len(), 4);
}

#[test]
fn test_circle_clips_at_canvas_edge() {
    let mut canvas = Canvas::new(4, 4, ' ').unwrap();
    draw_circle(&mut canvas, Point::new(0, 0), 3, '*');
    assert_eq!(canvas.get(3, 0), Some('*'));
    assert_eq!(canvas.get(0, 3), Some('*'));
    assert_eq!(canvas.get(0, 0), Some(' '));
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let mut canvas = Canvas::new(10, 10, ' ').unwrap();
    draw_circle(&mut canvas, Point::new(i32::MAX, 0), 1, 'o');
    draw_circle(&mut canvas, Point::new(i32::MIN, i32::MIN), 3, 'o');
    assert_eq!(canvas.count_set(), 0);

    // Only the reflections pointing back into i32 space survive.
    let plotted: Vec<Point> = circle_points(Point::new(i32::MAX, i32::MAX), 2).collect();
    assert_eq!(plotted.len(), 6);
    let corner: BTreeSet<Point> = plotted.into_iter().collect();
    assert_eq!(corner.len(), 4);
    assert!(corner.contains(&Point::new(i32::MAX - 2, i32::MAX)));
    assert!(corner.contains(&Point::new(i32::MAX, i32::MAX - 2)));
    assert!(!corner.contains(&Point::new(i32::MAX - 1, i32::MAX - 1)));
}

#[test]
fn test_huge_radius_stays_in_range() {
    // Four of the eight reflections fit per offset; 50_000 offsets runs past
    // the first diagonal step of the recurrence.
    let taken = circle_points(Point::new(5, 5), i32::MAX).take(200_000).count();
    assert_eq!(taken, 200_000);
}
