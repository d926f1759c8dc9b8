// src/raster/fill.rs

//! Gradient and tiling pattern fills.

use serde::{Deserialize, Serialize};

use crate::buffer::CharBuffer;
use crate::config::{GradientOptions, PatternOptions};
use crate::palette::Palette;

/// Axis along which a linear gradient ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// Density ramps left to right.
    Horizontal,
    /// Density ramps top to bottom.
    Vertical,
}

/// Fills a region with a linear density ramp mapped through a palette.
pub fn gradient_fill(
    buf: &mut CharBuffer,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    direction: GradientDirection,
    opts: &GradientOptions,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let palette = Palette::from_kind(opts.palette);
    for dy in 0..height {
        for dx in 0..width {
            let t = match direction {
                GradientDirection::Horizontal if width > 1 => dx as f64 / (width - 1) as f64,
                GradientDirection::Vertical if height > 1 => dy as f64 / (height - 1) as f64,
                _ => 0.0,
            };
            let density = if opts.reverse { 1.0 - t } else { t };
            if let Ok(ch) = palette.density_to_char(density) {
                buf.set_cell(x + dx, y + dy, ch, opts.color, opts.depth);
            }
        }
    }
}

/// Fills a region by tiling a 2D character pattern via modulo indexing.
///
/// `pattern` is a set of rows; ragged rows tile independently. An empty
/// pattern is a no-op.
pub fn pattern_fill(
    buf: &mut CharBuffer,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    pattern: &[&str],
    opts: &PatternOptions,
) {
    let rows: Vec<Vec<char>> = pattern.iter().map(|row| row.chars().collect()).collect();
    if rows.is_empty() {
        return;
    }
    for dy in 0..height.max(0) {
        let row = &rows[dy as usize % rows.len()];
        if row.is_empty() {
            continue;
        }
        for dx in 0..width.max(0) {
            let ch = row[dx as usize % row.len()];
            buf.set_cell(x + dx, y + dy, ch, opts.color, opts.depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_gradient_ramps_to_dense() {
        let mut buf = CharBuffer::new(10, 2).unwrap();
        gradient_fill(
            &mut buf,
            0,
            0,
            10,
            2,
            GradientDirection::Horizontal,
            &GradientOptions::default(),
        );
        // Standard palette: empty at the left edge, dense at the right.
        assert_eq!(buf.char_at(0, 0), ' ');
        assert_eq!(buf.char_at(9, 0), '@');
        // Rows are identical.
        assert_eq!(buf.char_at(4, 0), buf.char_at(4, 1));
    }

    #[test]
    fn reversed_gradient_flips_the_ramp() {
        let mut buf = CharBuffer::new(10, 1).unwrap();
        let opts = GradientOptions {
            reverse: true,
            ..Default::default()
        };
        gradient_fill(&mut buf, 0, 0, 10, 1, GradientDirection::Horizontal, &opts);
        assert_eq!(buf.char_at(0, 0), '@');
        assert_eq!(buf.char_at(9, 0), ' ');
    }

    #[test]
    fn vertical_gradient_ramps_down() {
        let mut buf = CharBuffer::new(2, 5).unwrap();
        gradient_fill(
            &mut buf,
            0,
            0,
            2,
            5,
            GradientDirection::Vertical,
            &GradientOptions::default(),
        );
        assert_eq!(buf.char_at(0, 0), ' ');
        assert_eq!(buf.char_at(0, 4), '@');
    }

    #[test]
    fn pattern_tiles_by_modulo() {
        let mut buf = CharBuffer::new(5, 4).unwrap();
        pattern_fill(&mut buf, 0, 0, 5, 4, &["ab", "cd"], &PatternOptions::default());
        assert_eq!(format!("{}", buf), "ababa\ncdcdc\nababa\ncdcdc");
    }

    #[test]
    fn empty_pattern_is_a_noop() {
        let mut buf = CharBuffer::new(3, 3).unwrap();
        pattern_fill(&mut buf, 0, 0, 3, 3, &[], &PatternOptions::default());
        assert_eq!(format!("{}", buf).trim(), "");
    }
}
