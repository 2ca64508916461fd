//! Canvas tests - construction, clipping, serialization

use tui_raster::core::{draw_line, Canvas, RasterError};
use tui_raster::types::Point;

#[test]
fn test_canvas_new_is_background_block() {
    let canvas = Canvas::new(10, 5, ' ').unwrap();
    assert_eq!(canvas.width(), 10);
    assert_eq!(canvas.height(), 5);

    let text = canvas.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line, " ".repeat(10));
    }
}

#[test]
fn test_canvas_invalid_dimension() {
    assert!(matches!(
        Canvas::new(0, 5, ' '),
        Err(RasterError::InvalidDimension { width: 0, height: 5 })
    ));
    assert!(matches!(
        Canvas::new(10, -2, ' '),
        Err(RasterError::InvalidDimension { .. })
    ));
}

#[test]
fn test_clear_then_render_is_background() {
    let mut canvas = Canvas::new(7, 3, '.').unwrap();
    draw_line(&mut canvas, Point::new(0, 0), Point::new(6, 2), '#');
    assert!(canvas.count_set() > 0);

    canvas.clear();
    assert_eq!(canvas.render(), ".......\n.......\n.......\n");
}

#[test]
fn test_out_of_bounds_writes_never_touch_grid() {
    let mut canvas = Canvas::new(6, 4, ' ').unwrap();
    canvas.set_pixel(2, 2, 'k');
    let before = canvas.render();

    for x in -3..10 {
        for y in -3..8 {
            if !canvas.in_bounds(x, y) {
                canvas.set_pixel(x, y, '#');
            }
        }
    }
    assert_eq!(canvas.render(), before);
}

#[test]
fn test_horizontal_line_fills_first_row() {
    // Canvas(10,5,' '); drawLine(0,0,9,0,'#')
    let mut canvas = Canvas::new(10, 5, ' ').unwrap();
    draw_line(&mut canvas, Point::new(0, 0), Point::new(9, 0), '#');

    let text = canvas.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "##########");
    for line in &lines[1..] {
        assert_eq!(*line, "          ");
    }
}

#[test]
fn test_render_is_rectangular_after_drawing() {
    let mut canvas = Canvas::new(13, 6, ' ').unwrap();
    draw_line(&mut canvas, Point::new(-20, -4), Point::new(40, 30), '\\');
    draw_line(&mut canvas, Point::new(0, 5), Point::new(12, 0), '/');

    let text = canvas.render();
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 6);
    assert!(text.lines().all(|l| l.chars().count() == 13));
    assert!(text
        .chars()
        .all(|c| c == '\n' || c == ' ' || c == '\\' || c == '/'));
}

#[test]
fn test_rows_match_render() {
    let mut canvas = Canvas::new(3, 2, '-').unwrap();
    canvas.set_pixel(1, 1, '+');
    let rows: Vec<String> = canvas.rows().map(|r| r.iter().collect()).collect();
    assert_eq!(rows, vec!["---", "-+-"]);
}
