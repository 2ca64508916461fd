//! Scenes: ordered lists of shapes that make up one frame.

use std::time::Duration;

use crate::canvas::Canvas;
use crate::circle::draw_circle;
use crate::error::Result;
use crate::frames::{FrameSequence, FrameSequencer};
use crate::line::draw_line;
use crate::polygon::draw_polygon;
use crate::types::{Point, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Line { from: Point, to: Point },
    Circle { center: Point, radius: i32 },
    Polygon(Vec<Point>),
}

impl Shape {
    pub fn draw(&self, canvas: &mut Canvas, ch: char) {
        match self {
            Shape::Line { from, to } => draw_line(canvas, *from, *to, ch),
            Shape::Circle { center, radius } => draw_circle(canvas, *center, *radius, ch),
            Shape::Polygon(vertices) => draw_polygon(canvas, vertices, ch),
        }
    }
}

/// Shapes drawn in order onto a cleared canvas. Later shapes overwrite
/// earlier ones where they overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    shapes: Vec<(Shape, char)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, shape: Shape, ch: char) -> Self {
        self.shapes.push((shape, ch));
        self
    }

    pub fn push(&mut self, shape: Shape, ch: char) {
        self.shapes.push((shape, ch));
    }

    pub fn shapes(&self) -> &[(Shape, char)] {
        &self.shapes
    }

    /// Clear `canvas` and draw every shape.
    pub fn render_into(&self, canvas: &mut Canvas) {
        canvas.clear();
        for (shape, ch) in &self.shapes {
            shape.draw(canvas, *ch);
        }
    }
}

/// Render each scene in turn on `canvas` and collect the snapshots.
pub fn build_sequence(
    canvas: &mut Canvas,
    scenes: &[Scene],
    delay: Duration,
) -> Result<FrameSequence> {
    let mut sequencer = FrameSequencer::with_capacity(scenes.len());
    for scene in scenes {
        scene.render_into(canvas);
        sequencer.capture(canvas);
    }
    sequencer.finish(delay)
}

/// The four-frame demo: two diagonals, a centred circle, and a triangle.
///
/// Coordinates are laid out for an 80x30 grid and scaled proportionally for
/// other sizes.
pub fn demo_scenes(width: i32, height: i32) -> Vec<Scene> {
    let at = |x: i32, y: i32| {
        Point::new(
            scale(x, width, DEFAULT_WIDTH),
            scale(y, height, DEFAULT_HEIGHT),
        )
    };

    vec![
        Scene::new().with(
            Shape::Line {
                from: at(5, 3),
                to: at(70, 25),
            },
            '#',
        ),
        Scene::new().with(
            Shape::Line {
                from: at(10, 25),
                to: at(60, 2),
            },
            '*',
        ),
        Scene::new().with(
            Shape::Circle {
                center: Point::new(width / 2, height / 2),
                radius: width.min(height) / 4,
            },
            'o',
        ),
        Scene::new().with(
            Shape::Polygon(vec![at(10, 5), at(70, 8), at(40, 23)]),
            'A',
        ),
    ]
}

fn scale(v: i32, size: i32, reference: i32) -> i32 {
    ((v as i64) * (size as i64) / (reference as i64)) as i32
}
