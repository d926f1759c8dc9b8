// src/dither/mod.rs

//! The dithering engine: quantizes scalar intensity fields onto a bounded
//! set of levels, for conversion into palette glyphs.
//!
//! Three families live here. Error diffusion (`diffusion`) is scan-order
//! dependent and propagates quantization error into not-yet-visited
//! cells. Ordered and pattern dithering (`ordered`) are position-only
//! threshold tests against a matrix. Noise dithering (`random`) is the
//! same threshold test against a positional hash. The driver
//! [`dither_to_chars`] dispatches between them and maps the quantized
//! field through a density palette.

pub mod diffusion;
pub mod matrix;
pub mod ordered;
pub mod random;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::buffer::CharBuffer;
use crate::color::Color;
use crate::config::DitherOptions;
use crate::palette::Palette;

pub use diffusion::{diffuse_field, DiffusionKernel};
pub use matrix::DitherMatrix;
pub use ordered::{ordered_dither_value, pattern_dither_value};
pub use random::{hash_threshold, random_dither_value};

/// A 2D scalar intensity field, conceptually in [0, 1].
///
/// Out-of-range values are accepted; every consuming algorithm clamps
/// before quantizing. Algorithms never mutate a caller's field — they
/// work on their own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl IntensityField {
    /// A zeroed field. Zero-sized fields are legal and every algorithm
    /// short-circuits on them.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        IntensityField {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Builds a field from rows of intensities. Ragged rows are padded
    /// with zero to the widest row.
    #[must_use]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut field = IntensityField::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                field.set(x, y, value);
            }
        }
        field
    }

    /// Builds a field from rows of 8-bit brightness values (0-255),
    /// normalized to [0, 1].
    #[must_use]
    pub fn from_brightness(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut field = IntensityField::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                field.set(x, y, value as f64 / 255.0);
            }
        }
        field
    }

    /// Field width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the field has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at a cell; 0.0 out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        if x < self.width && y < self.height {
            self.values[y * self.width + x]
        } else {
            0.0
        }
    }

    /// Sets the value at a cell; no-op out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        if x < self.width && y < self.height {
            self.values[y * self.width + x] = value;
        }
    }

    /// Adds into a cell, dropping out-of-bounds deltas.
    pub(crate) fn accumulate(&mut self, x: i64, y: i64, delta: f64) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.values[y as usize * self.width + x as usize] += delta;
        }
    }
}

/// Number of quantization steps for a level count, `None` when a single
/// level collapses everything to zero.
pub(crate) fn quantize_steps(levels: usize) -> Option<f64> {
    if levels <= 1 {
        None
    } else {
        Some((levels - 1) as f64)
    }
}

/// Quantizes a value to the nearest of `levels` evenly spaced outputs in
/// [0, 1]. The value is clamped first.
#[must_use]
pub fn quantize(value: f64, levels: usize) -> f64 {
    match quantize_steps(levels) {
        Some(steps) => (value.clamp(0.0, 1.0) * steps).round() / steps,
        None => 0.0,
    }
}

/// The closed set of dithering algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherAlgorithm {
    /// Floyd–Steinberg error diffusion.
    FloydSteinberg,
    /// Jarvis–Judice–Ninke error diffusion.
    JarvisJudiceNinke,
    /// Atkinson error diffusion (deliberately lossy, lighter output).
    Atkinson,
    /// Sierra error diffusion.
    Sierra,
    /// Stucki error diffusion.
    Stucki,
    /// Ordered dithering with the 2x2 Bayer matrix.
    Bayer2,
    /// Ordered dithering with the 4x4 Bayer matrix.
    Bayer4,
    /// Ordered dithering with the 8x8 Bayer matrix.
    Bayer8,
    /// On/off checkerboard pattern dithering.
    Checker,
    /// On/off clustered-dot halftone dithering.
    Halftone,
    /// Deterministic noise dithering.
    Random,
}

impl DitherAlgorithm {
    /// Parses an algorithm name, defaulting to `Bayer4` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "floyd-steinberg" | "fs" => DitherAlgorithm::FloydSteinberg,
            "jarvis-judice-ninke" | "jarvis" | "jjn" => DitherAlgorithm::JarvisJudiceNinke,
            "atkinson" => DitherAlgorithm::Atkinson,
            "sierra" => DitherAlgorithm::Sierra,
            "stucki" => DitherAlgorithm::Stucki,
            "bayer2" => DitherAlgorithm::Bayer2,
            "bayer" | "bayer4" => DitherAlgorithm::Bayer4,
            "bayer8" => DitherAlgorithm::Bayer8,
            "checker" => DitherAlgorithm::Checker,
            "halftone" => DitherAlgorithm::Halftone,
            "random" | "noise" => DitherAlgorithm::Random,
            _ => {
                warn!("Unknown dither algorithm: '{}'. Defaulting to bayer4.", name);
                DitherAlgorithm::Bayer4
            }
        }
    }
}

fn build_palette(opts: &DitherOptions) -> Palette {
    if opts.reverse_palette {
        Palette::from_kind(opts.palette).reversed()
    } else {
        Palette::from_kind(opts.palette)
    }
}

/// Quantizes a field with the configured algorithm.
///
/// The level count defaults to the target palette's length. The returned
/// field is always a fresh allocation; the input is untouched.
#[must_use]
pub fn dither_field(field: &IntensityField, opts: &DitherOptions) -> IntensityField {
    let levels = opts
        .levels
        .unwrap_or_else(|| Palette::from_kind(opts.palette).len())
        .max(1);
    match opts.algorithm {
        DitherAlgorithm::FloydSteinberg => {
            diffusion::diffuse_field(field, diffusion::FLOYD_STEINBERG, levels)
        }
        DitherAlgorithm::JarvisJudiceNinke => {
            diffusion::diffuse_field(field, diffusion::JARVIS_JUDICE_NINKE, levels)
        }
        DitherAlgorithm::Atkinson => diffusion::diffuse_field(field, diffusion::ATKINSON, levels),
        DitherAlgorithm::Sierra => diffusion::diffuse_field(field, diffusion::SIERRA, levels),
        DitherAlgorithm::Stucki => diffusion::diffuse_field(field, diffusion::STUCKI, levels),
        DitherAlgorithm::Bayer2 => ordered::ordered_dither_field(field, &matrix::BAYER2, levels),
        DitherAlgorithm::Bayer4 => ordered::ordered_dither_field(field, &matrix::BAYER4, levels),
        DitherAlgorithm::Bayer8 => ordered::ordered_dither_field(field, &matrix::BAYER8, levels),
        DitherAlgorithm::Checker => ordered::pattern_dither_field(field, &matrix::CHECKER),
        DitherAlgorithm::Halftone => ordered::pattern_dither_field(field, &matrix::HALFTONE_DOT),
        DitherAlgorithm::Random => random::random_dither_field(field, opts.seed, levels),
    }
}

/// Dithers a field and maps every quantized value through the palette.
#[must_use]
pub fn dither_to_chars(field: &IntensityField, opts: &DitherOptions) -> Vec<Vec<char>> {
    let palette = build_palette(opts);
    let quantized = dither_field(field, opts);
    (0..quantized.height())
        .map(|y| {
            (0..quantized.width())
                .map(|x| palette.density_to_char(quantized.get(x, y)).unwrap_or(' '))
                .collect()
        })
        .collect()
}

/// Dithers a field and writes the resulting glyphs into a buffer with the
/// field's top-left corner at `(x, y)`.
pub fn dither_into(
    buf: &mut CharBuffer,
    x: i64,
    y: i64,
    field: &IntensityField,
    opts: &DitherOptions,
    color: Color,
    depth: f64,
) {
    let rows = dither_to_chars(field, opts);
    for (dy, row) in rows.iter().enumerate() {
        for (dx, &ch) in row.iter().enumerate() {
            buf.set_cell(x + dx as i64, y + dy as i64, ch, color, depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteKind;

    #[test]
    fn unknown_algorithm_name_falls_back() {
        assert_eq!(DitherAlgorithm::from_name("wiggle"), DitherAlgorithm::Bayer4);
        assert_eq!(
            DitherAlgorithm::from_name("floyd-steinberg"),
            DitherAlgorithm::FloydSteinberg
        );
    }

    #[test]
    fn quantize_snaps_to_level_grid() {
        assert_eq!(quantize(0.6, 2), 1.0);
        assert_eq!(quantize(0.4, 2), 0.0);
        assert_eq!(quantize(0.5, 3), 0.5);
        assert_eq!(quantize(-4.0, 2), 0.0);
        assert_eq!(quantize(7.0, 2), 1.0);
        assert_eq!(quantize(0.9, 1), 0.0);
    }

    #[test]
    fn levels_default_to_palette_length() {
        // Blocks palette has 5 glyphs; a mid gray through Bayer must land
        // on one of the 5 level values.
        let field = IntensityField::from_rows(&vec![vec![0.42; 4]; 4]);
        let opts = DitherOptions {
            algorithm: DitherAlgorithm::Bayer4,
            palette: PaletteKind::Blocks,
            ..Default::default()
        };
        let out = dither_field(&field, &opts);
        for y in 0..4 {
            for x in 0..4 {
                let scaled = out.get(x, y) * 4.0;
                assert!((scaled - scaled.round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn chars_come_from_the_requested_palette() {
        let field = IntensityField::from_rows(&[vec![0.0, 1.0]]);
        let opts = DitherOptions {
            algorithm: DitherAlgorithm::Bayer2,
            palette: PaletteKind::Blocks,
            ..Default::default()
        };
        let rows = dither_to_chars(&field, &opts);
        assert_eq!(rows, vec![vec![' ', '█']]);
    }

    #[test]
    fn reversed_palette_flips_glyphs() {
        let field = IntensityField::from_rows(&[vec![1.0]]);
        let opts = DitherOptions {
            algorithm: DitherAlgorithm::Bayer2,
            palette: PaletteKind::Blocks,
            reverse_palette: true,
            ..Default::default()
        };
        let rows = dither_to_chars(&field, &opts);
        assert_eq!(rows, vec![vec![' ']]);
    }

    #[test]
    fn dither_into_writes_at_the_offset() {
        let mut buf = CharBuffer::new(6, 3).unwrap();
        let field = IntensityField::from_rows(&[vec![1.0, 1.0]]);
        let opts = DitherOptions {
            algorithm: DitherAlgorithm::Bayer2,
            palette: PaletteKind::Minimal,
            ..Default::default()
        };
        dither_into(&mut buf, 2, 1, &field, &opts, Color::Default, 0.0);
        assert_eq!(buf.char_at(2, 1), '@');
        assert_eq!(buf.char_at(3, 1), '@');
        assert_eq!(buf.char_at(0, 0), ' ');
    }

    #[test]
    fn ragged_rows_pad_with_zero() {
        let field = IntensityField::from_rows(&[vec![1.0], vec![1.0, 1.0, 1.0]]);
        assert_eq!(field.width(), 3);
        assert_eq!(field.get(2, 0), 0.0);
        assert_eq!(field.get(2, 1), 1.0);
    }

    #[test]
    fn brightness_rows_normalize() {
        let field = IntensityField::from_brightness(&[vec![0, 128, 255]]);
        assert_eq!(field.get(0, 0), 0.0);
        assert!((field.get(1, 0) - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(field.get(2, 0), 1.0);
    }
}
