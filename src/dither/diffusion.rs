// src/dither/diffusion.rs

//! Error-diffusion dithering kernels.
//!
//! Every kernel runs the same per-cell cycle in row-major scan order:
//! read the accumulated value, quantize it to the nearest of the evenly
//! spaced output levels, and diffuse the quantization error into
//! not-yet-visited neighbors. Tap offsets only ever point right on the
//! current row or anywhere on later rows, which is what makes the
//! algorithms causal and stable. Weights sum to 1 so intensity is
//! conserved — redistributed in space, never created or destroyed.
//! Atkinson is the deliberate exception: it diffuses only 6/8 of the
//! error, so its output trends lighter than the input.
//!
//! Diffusion operates on an owned working copy of the caller's field;
//! the original is never written.

use crate::dither::{quantize, IntensityField};

/// An error-diffusion kernel: `(dx, dy, weight)` taps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionKernel {
    /// Human-readable kernel name, for logs.
    pub name: &'static str,
    /// Tap offsets and weights. All taps target cells later in row-major
    /// scan order.
    pub taps: &'static [(i64, i64, f64)],
}

/// Floyd–Steinberg: the classic 4-tap kernel.
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    name: "floyd-steinberg",
    taps: &[
        (1, 0, 7.0 / 16.0),
        (-1, 1, 3.0 / 16.0),
        (0, 1, 5.0 / 16.0),
        (1, 1, 1.0 / 16.0),
    ],
};

/// Jarvis–Judice–Ninke: 12 taps over two rows, divisor 48.
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel {
    name: "jarvis-judice-ninke",
    taps: &[
        (1, 0, 7.0 / 48.0),
        (2, 0, 5.0 / 48.0),
        (-2, 1, 3.0 / 48.0),
        (-1, 1, 5.0 / 48.0),
        (0, 1, 7.0 / 48.0),
        (1, 1, 5.0 / 48.0),
        (2, 1, 3.0 / 48.0),
        (-2, 2, 1.0 / 48.0),
        (-1, 2, 3.0 / 48.0),
        (0, 2, 5.0 / 48.0),
        (1, 2, 3.0 / 48.0),
        (2, 2, 1.0 / 48.0),
    ],
};

/// Atkinson: six equal 1/8 taps; 2/8 of the error is discarded.
pub const ATKINSON: DiffusionKernel = DiffusionKernel {
    name: "atkinson",
    taps: &[
        (1, 0, 1.0 / 8.0),
        (2, 0, 1.0 / 8.0),
        (-1, 1, 1.0 / 8.0),
        (0, 1, 1.0 / 8.0),
        (1, 1, 1.0 / 8.0),
        (0, 2, 1.0 / 8.0),
    ],
};

/// Sierra: 10 taps over two rows, divisor 32.
pub const SIERRA: DiffusionKernel = DiffusionKernel {
    name: "sierra",
    taps: &[
        (1, 0, 5.0 / 32.0),
        (2, 0, 3.0 / 32.0),
        (-2, 1, 2.0 / 32.0),
        (-1, 1, 4.0 / 32.0),
        (0, 1, 5.0 / 32.0),
        (1, 1, 4.0 / 32.0),
        (2, 1, 2.0 / 32.0),
        (-1, 2, 2.0 / 32.0),
        (0, 2, 3.0 / 32.0),
        (1, 2, 2.0 / 32.0),
    ],
};

/// Stucki: 12 taps over two rows, divisor 42.
pub const STUCKI: DiffusionKernel = DiffusionKernel {
    name: "stucki",
    taps: &[
        (1, 0, 8.0 / 42.0),
        (2, 0, 4.0 / 42.0),
        (-2, 1, 2.0 / 42.0),
        (-1, 1, 4.0 / 42.0),
        (0, 1, 8.0 / 42.0),
        (1, 1, 4.0 / 42.0),
        (2, 1, 2.0 / 42.0),
        (-2, 2, 1.0 / 42.0),
        (-1, 2, 2.0 / 42.0),
        (0, 2, 4.0 / 42.0),
        (1, 2, 2.0 / 42.0),
    ],
};

/// Runs error diffusion over an owned copy of `field`.
///
/// Error diffused past the field's right/bottom boundary is dropped, as
/// is (for Atkinson) the undiffused share of every cell's error.
#[must_use]
pub fn diffuse_field(
    field: &IntensityField,
    kernel: DiffusionKernel,
    levels: usize,
) -> IntensityField {
    let mut work = field.clone();
    if work.is_empty() {
        return work;
    }
    for y in 0..work.height() {
        for x in 0..work.width() {
            let old = work.get(x, y);
            let new = quantize(old, levels);
            let err = old - new;
            work.set(x, y, new);
            for &(dx, dy, weight) in kernel.taps {
                work.accumulate(x as i64 + dx, y as i64 + dy, err * weight);
            }
        }
    }
    work
}
