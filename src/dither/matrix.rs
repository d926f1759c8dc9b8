// src/dither/matrix.rs

//! Threshold matrices for ordered and pattern dithering.
//!
//! The Bayer matrices are valid threshold matrices: an n x n matrix holds
//! every value in `[0, n^2 - 1]` exactly once, arranged to minimize
//! visible artifacts. The shape matrices (checker, clustered halftone
//! dot) trade that property for a stylized pattern and are only used for
//! 2-level output.
//!
//! Thresholds are normalized as `(value + 0.5) / (max + 1)`, so they
//! never reach exactly 0 or 1: a full-on input always quantizes to the
//! maximum level and a full-off input to the minimum.

use once_cell::sync::Lazy;

/// A positional threshold matrix, indexed modulo its dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct DitherMatrix {
    width: usize,
    height: usize,
    values: Vec<u32>,
    denom: f64,
}

impl DitherMatrix {
    /// Builds a matrix from rows of raw threshold values.
    #[must_use]
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let values: Vec<u32> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let denom = values.iter().copied().max().unwrap_or(0) as f64 + 1.0;
        DitherMatrix {
            width,
            height,
            values,
            denom,
        }
    }

    /// Matrix width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Matrix height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The normalized threshold for a cell position, tiled by modulo.
    ///
    /// Negative coordinates wrap the same way positive ones do. A
    /// degenerate empty matrix yields a flat 0.5 threshold.
    #[must_use]
    pub fn threshold(&self, x: i64, y: i64) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let xi = x.rem_euclid(self.width as i64) as usize;
        let yi = y.rem_euclid(self.height as i64) as usize;
        (self.values[yi * self.width + xi] as f64 + 0.5) / self.denom
    }
}

/// 2x2 Bayer matrix.
pub static BAYER2: Lazy<DitherMatrix> =
    Lazy::new(|| DitherMatrix::from_rows(&[&[0, 2], &[3, 1]]));

/// 4x4 Bayer matrix.
pub static BAYER4: Lazy<DitherMatrix> = Lazy::new(|| {
    DitherMatrix::from_rows(&[
        &[0, 8, 2, 10],
        &[12, 4, 14, 6],
        &[3, 11, 1, 9],
        &[15, 7, 13, 5],
    ])
});

/// 8x8 Bayer matrix.
pub static BAYER8: Lazy<DitherMatrix> = Lazy::new(|| {
    DitherMatrix::from_rows(&[
        &[0, 32, 8, 40, 2, 34, 10, 42],
        &[48, 16, 56, 24, 50, 18, 58, 26],
        &[12, 44, 4, 36, 14, 46, 6, 38],
        &[60, 28, 52, 20, 62, 30, 54, 22],
        &[3, 35, 11, 43, 1, 33, 9, 41],
        &[51, 19, 59, 27, 49, 17, 57, 25],
        &[15, 47, 7, 39, 13, 45, 5, 37],
        &[63, 31, 55, 23, 61, 29, 53, 21],
    ])
});

/// 2x2 checkerboard pattern, for stylized on/off output.
pub static CHECKER: Lazy<DitherMatrix> =
    Lazy::new(|| DitherMatrix::from_rows(&[&[0, 1], &[1, 0]]));

/// 4x4 clustered-dot halftone pattern: cells activate outward from the
/// center, imitating a printer's halftone screen.
pub static HALFTONE_DOT: Lazy<DitherMatrix> = Lazy::new(|| {
    DitherMatrix::from_rows(&[
        &[12, 5, 6, 13],
        &[4, 0, 1, 7],
        &[11, 3, 2, 8],
        &[15, 10, 9, 14],
    ])
});
