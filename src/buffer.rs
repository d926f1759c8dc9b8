// src/buffer.rs

//! The character grid buffer: a fixed-size 2D grid of glyph cells with
//! depth-tested compositing.
//!
//! Every drawing primitive in this crate ultimately routes through
//! [`CharBuffer::set_cell`], which applies the buffer's single consistency
//! rule: a write at depth `d` only lands if `d` is at least the cell's
//! stored depth (last-writer-wins among equal depths, strict-highest-wins
//! otherwise). Callers that assign depths correctly get deterministic
//! layer compositing regardless of call order.
//!
//! Out-of-bounds coordinates are never an error: writes are no-ops and
//! reads return the fill character / default color. Rasterization
//! primitives generate large volumes of coordinates and a single stray
//! one must not abort a shape.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::color::Color;
use crate::error::BufferError;

/// Default fill character for new buffers.
pub const DEFAULT_FILL: char = ' ';

/// A run of consecutive same-colored characters within one row.
///
/// The color-run view exists so a markup serializer can emit one styled
/// wrapper per run instead of one per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRun {
    /// The run's characters, in row order.
    pub text: String,
    /// The color shared by every character in the run.
    pub color: Color,
}

/// A fixed-size grid of character cells with per-cell color and depth.
#[derive(Debug, Clone, PartialEq)]
pub struct CharBuffer {
    width: usize,
    height: usize,
    fill_char: char,
    /// Row-major cell storage, `width * height` long.
    cells: Vec<Cell>,
}

impl CharBuffer {
    /// Creates a buffer of `width` x `height` cells filled with spaces.
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is
    /// zero.
    pub fn new(width: usize, height: usize) -> Result<Self, BufferError> {
        Self::with_fill(width, height, DEFAULT_FILL)
    }

    /// Creates a buffer with an explicit fill character.
    pub fn with_fill(width: usize, height: usize, fill_char: char) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        trace!("Creating CharBuffer {}x{}, fill {:?}", width, height, fill_char);
        Ok(CharBuffer {
            width,
            height,
            fill_char,
            cells: vec![Cell::cleared(fill_char); width * height],
        })
    }

    /// Buffer width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The character cleared cells hold.
    #[must_use]
    pub fn fill_char(&self) -> char {
        self.fill_char
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Writes a cell at integer coordinates, subject to the depth test.
    ///
    /// No-op when out of bounds or when `depth` is below the cell's stored
    /// depth. Equal depth overwrites (last writer wins).
    pub fn set_cell(&mut self, x: i64, y: i64, ch: char, color: Color, depth: f64) {
        if let Some(index) = self.index_of(x, y) {
            let cell = &mut self.cells[index];
            if depth >= cell.depth {
                *cell = Cell { ch, color, depth };
            }
        }
    }

    /// Writes a cell at real coordinates, rounding to the nearest cell.
    pub fn set(&mut self, x: f64, y: f64, ch: char, color: Color, depth: f64) {
        self.set_cell(x.round() as i64, y.round() as i64, ch, color, depth);
    }

    /// Replaces a cell's glyph and color, bypassing the depth test.
    ///
    /// The cell's stored depth is left untouched, so subsequent depth-tested
    /// writes behave exactly as they would have before. Flood fill uses
    /// this: it overwrites whatever occupies its target region.
    pub fn overwrite_cell(&mut self, x: i64, y: i64, ch: char, color: Color) {
        if let Some(index) = self.index_of(x, y) {
            let cell = &mut self.cells[index];
            cell.ch = ch;
            cell.color = color;
        }
    }

    /// The character at integer coordinates; fill character out of bounds.
    #[must_use]
    pub fn char_at(&self, x: i64, y: i64) -> char {
        match self.index_of(x, y) {
            Some(index) => self.cells[index].ch,
            None => self.fill_char,
        }
    }

    /// The color at integer coordinates; `Color::Default` out of bounds.
    #[must_use]
    pub fn color_at(&self, x: i64, y: i64) -> Color {
        match self.index_of(x, y) {
            Some(index) => self.cells[index].color,
            None => Color::Default,
        }
    }

    /// The full cell at integer coordinates, if in bounds.
    #[must_use]
    pub fn cell_at(&self, x: i64, y: i64) -> Option<&Cell> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    /// The character at real coordinates, rounding to the nearest cell.
    #[must_use]
    pub fn get(&self, x: f64, y: f64) -> char {
        self.char_at(x.round() as i64, y.round() as i64)
    }

    /// The color at real coordinates, rounding to the nearest cell.
    #[must_use]
    pub fn get_color(&self, x: f64, y: f64) -> Color {
        self.color_at(x.round() as i64, y.round() as i64)
    }

    /// Resets every cell to `(fill, Color::Default, -inf)`.
    ///
    /// Passing a fill character also makes it the buffer's fill character
    /// for subsequent clears and out-of-bounds reads.
    pub fn clear(&mut self, fill: Option<char>) {
        if let Some(ch) = fill {
            self.fill_char = ch;
        }
        let cleared = Cell::cleared(self.fill_char);
        self.cells.fill(cleared);
    }

    /// Reallocates the grid, preserving the overlapping top-left region.
    ///
    /// Characters and colors of overlapping cells survive; depth does not —
    /// every cell of the resized buffer starts a fresh compositing epoch at
    /// negative infinity.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), BufferError> {
        if new_width == 0 || new_height == 0 {
            return Err(BufferError::InvalidDimensions {
                width: new_width,
                height: new_height,
            });
        }
        trace!(
            "Resizing CharBuffer {}x{} -> {}x{}",
            self.width,
            self.height,
            new_width,
            new_height
        );
        let mut cells = vec![Cell::cleared(self.fill_char); new_width * new_height];
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                let old = self.cells[y * self.width + x];
                cells[y * new_width + x] = Cell {
                    ch: old.ch,
                    color: old.color,
                    depth: f64::NEG_INFINITY,
                };
            }
        }
        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
        Ok(())
    }

    /// Writes `text` left to right starting at `(x, y)`, one depth-tested
    /// `set` per character. Text is not wrapped; characters falling outside
    /// the grid are dropped by the normal out-of-bounds rule.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color, depth: f64) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as f64, y, ch, color, depth);
        }
    }

    /// The grid as a nested character array, row-major.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<char>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[y * self.width + x].ch)
                    .collect()
            })
            .collect()
    }

    /// Groups each row into runs of consecutive same-colored characters.
    #[must_use]
    pub fn color_runs(&self) -> Vec<Vec<ColorRun>> {
        let mut rows = Vec::with_capacity(self.height);
        for y in 0..self.height {
            let mut runs: Vec<ColorRun> = Vec::new();
            for x in 0..self.width {
                let cell = &self.cells[y * self.width + x];
                match runs.last_mut() {
                    Some(run) if run.color == cell.color => run.text.push(cell.ch),
                    _ => runs.push(ColorRun {
                        text: cell.ch.to_string(),
                        color: cell.color,
                    }),
                }
            }
            rows.push(runs);
        }
        rows
    }

    /// Copies a rectangular region of `src` into this buffer at an offset.
    ///
    /// Source cells holding this buffer's fill character are treated as
    /// transparent and skipped; everything else goes through the normal
    /// depth test at the source cell's stored depth.
    pub fn copy_region(
        &mut self,
        src: &CharBuffer,
        src_x: i64,
        src_y: i64,
        width: i64,
        height: i64,
        dest_x: i64,
        dest_y: i64,
    ) {
        for dy in 0..height.max(0) {
            for dx in 0..width.max(0) {
                let Some(cell) = src.cell_at(src_x + dx, src_y + dy) else {
                    continue;
                };
                if cell.ch == self.fill_char {
                    continue;
                }
                self.set_cell(dest_x + dx, dest_y + dy, cell.ch, cell.color, cell.depth);
            }
        }
    }
}

impl std::fmt::Display for CharBuffer {
    /// Flattens the grid to newline-joined rows of characters.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", self.cells[y * self.width + x].ch)?;
            }
        }
        Ok(())
    }
}
