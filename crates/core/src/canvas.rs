//! Character canvas: a fixed-size grid of glyphs with clipped pixel writes.

use std::fmt;

use crate::error::{RasterError, Result};
use crate::frames::Frame;

/// 2D grid of characters.
///
/// Cells are stored row-major in a single allocation, so every row always has
/// exactly `width` cells. The canvas is never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    background: char,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    ///
    /// Fails with [`RasterError::InvalidDimension`] when either side is not
    /// positive, and with [`RasterError::InvalidGlyph`] when `background` is a
    /// control character.
    pub fn new(width: i32, height: i32, background: char) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }
        if background.is_control() {
            return Err(RasterError::InvalidGlyph(background));
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            background,
            cells: vec![background; len],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn background(&self) -> char {
        self.background
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write `ch` at `(x, y)`.
    ///
    /// Writes outside the grid are dropped, as are control characters. This
    /// is the clipping policy the rasterizers rely on: they never check bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Reset every cell to the background character.
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Number of cells that differ from the background.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.background).count()
    }

    /// Serialize the grid: every row followed by `'\n'`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    /// Snapshot the current contents as an independent [`Frame`].
    pub fn capture(&self) -> Frame {
        Frame::new(self.render(), self.width as usize, self.height as usize)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
