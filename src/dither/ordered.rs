// src/dither/ordered.rs

//! Ordered (Bayer) and pattern dithering.
//!
//! Both are stateless and position-only: the output at a cell depends on
//! nothing but the input value and `(x mod n, y mod n)`, so they can be
//! evaluated per cell in any order.

use crate::dither::matrix::DitherMatrix;
use crate::dither::{quantize_steps, IntensityField};

/// Quantizes one value with an ordered threshold matrix.
///
/// The value is scaled to the level range, floored to a base level, and
/// bumped up one level when the fractional remainder exceeds the
/// positional threshold.
#[must_use]
pub fn ordered_dither_value(
    value: f64,
    x: i64,
    y: i64,
    matrix: &DitherMatrix,
    levels: usize,
) -> f64 {
    let Some(steps) = quantize_steps(levels) else {
        return 0.0;
    };
    let scaled = value.clamp(0.0, 1.0) * steps;
    let base = scaled.floor();
    let frac = scaled - base;
    let level = if frac > matrix.threshold(x, y) {
        base + 1.0
    } else {
        base
    };
    level.min(steps) / steps
}

/// Applies ordered dithering to a whole field.
#[must_use]
pub fn ordered_dither_field(
    field: &IntensityField,
    matrix: &DitherMatrix,
    levels: usize,
) -> IntensityField {
    let mut out = field.clone();
    for y in 0..out.height() {
        for x in 0..out.width() {
            let v = ordered_dither_value(out.get(x, y), x as i64, y as i64, matrix, levels);
            out.set(x, y, v);
        }
    }
    out
}

/// Quantizes one value with an arbitrary pattern matrix.
///
/// Pattern dithering is on/off only: the output is 1.0 where the value
/// exceeds the positional threshold and 0.0 elsewhere, regardless of any
/// requested level count.
#[must_use]
pub fn pattern_dither_value(value: f64, x: i64, y: i64, matrix: &DitherMatrix) -> f64 {
    if value.clamp(0.0, 1.0) > matrix.threshold(x, y) {
        1.0
    } else {
        0.0
    }
}

/// Applies pattern dithering to a whole field.
#[must_use]
pub fn pattern_dither_field(field: &IntensityField, matrix: &DitherMatrix) -> IntensityField {
    let mut out = field.clone();
    for y in 0..out.height() {
        for x in 0..out.width() {
            let v = pattern_dither_value(out.get(x, y), x as i64, y as i64, matrix);
            out.set(x, y, v);
        }
    }
    out
}
