//! Core rasterizer - pure, deterministic, and testable
//!
//! This crate contains the character canvas, the integer scan-conversion
//! algorithms, and frame sequencing. It has **no dependencies** on terminals,
//! threads, or clocks, making it:
//!
//! - **Deterministic**: Same inputs always select the same cells
//! - **Testable**: Every algorithm is exposed as a lazy iterator of points
//! - **Portable**: Output is plain text; any display can consume it
//!
//! # Module Structure
//!
//! - [`canvas`]: fixed-size character grid with clipped pixel writes
//! - [`line`]: Bresenham line rasterization
//! - [`circle`]: midpoint circle rasterization with octant reflection
//! - [`polygon`]: closed outlines composed from lines
//! - [`scene`]: shape lists and the built-in demo scenes
//! - [`frames`]: frame capture, cyclic playback, stop signal
//!
//! # Example
//!
//! ```
//! use tui_raster_core::{draw_circle, draw_line, Canvas};
//! use tui_raster_types::Point;
//!
//! let mut canvas = Canvas::new(10, 5, ' ').unwrap();
//! draw_line(&mut canvas, Point::new(0, 0), Point::new(9, 0), '#');
//! draw_circle(&mut canvas, Point::new(5, 2), 2, 'o');
//!
//! let text = canvas.render();
//! assert_eq!(text.lines().next(), Some("####ooo###"));
//! assert_eq!(text.lines().count(), 5);
//! ```
//!
//! # Clipping
//!
//! Rasterizers never check bounds. Points outside the canvas are produced as
//! usual and silently dropped by [`Canvas::set_pixel`].

pub mod canvas;
pub mod circle;
pub mod error;
pub mod frames;
pub mod line;
pub mod polygon;
pub mod scene;

pub use tui_raster_types as types;

// Re-export commonly used types for convenience
pub use canvas::Canvas;
pub use circle::{circle_offsets, circle_points, draw_circle, octant_reflections};
pub use error::{RasterError, Result};
pub use frames::{Frame, FrameSequence, FrameSequencer, FrameSink, Pacer, StopSignal};
pub use line::{draw_line, line_points, LinePoints};
pub use polygon::{draw_polygon, draw_triangle, polygon_edges};
pub use scene::{build_sequence, demo_scenes, Scene, Shape};
