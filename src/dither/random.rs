// src/dither/random.rs

//! Noise dithering with a deterministic positional hash.
//!
//! Each cell gets an independent threshold from a pure hash of
//! `(x, y, seed)`, so the output is reproducible across runs — the one
//! requirement that rules out an actual random source here. Structurally
//! this is ordered dithering with a hash in place of a matrix lookup.

use crate::dither::{quantize_steps, IntensityField};

/// A threshold in [0, 1) derived from the cell position and a seed.
///
/// FNV-1a over the coordinate bytes with a final avalanche mix; a pure
/// function of its inputs.
#[must_use]
pub fn hash_threshold(x: i64, y: i64, seed: u64) -> f64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut h = FNV_OFFSET ^ seed;
    for byte in x.to_le_bytes() {
        h = (h ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
    }
    for byte in y.to_le_bytes() {
        h = (h ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
    }
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;

    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// Quantizes one value against the positional hash threshold.
#[must_use]
pub fn random_dither_value(value: f64, x: i64, y: i64, seed: u64, levels: usize) -> f64 {
    let Some(steps) = quantize_steps(levels) else {
        return 0.0;
    };
    let scaled = value.clamp(0.0, 1.0) * steps;
    let base = scaled.floor();
    let frac = scaled - base;
    let level = if frac > hash_threshold(x, y, seed) {
        base + 1.0
    } else {
        base
    };
    level.min(steps) / steps
}

/// Applies noise dithering to a whole field.
#[must_use]
pub fn random_dither_field(field: &IntensityField, seed: u64, levels: usize) -> IntensityField {
    let mut out = field.clone();
    for y in 0..out.height() {
        for x in 0..out.width() {
            let v = random_dither_value(out.get(x, y), x as i64, y as i64, seed, levels);
            out.set(x, y, v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_a_pure_function() {
        for x in -4..4 {
            for y in -4..4 {
                assert_eq!(hash_threshold(x, y, 42), hash_threshold(x, y, 42));
            }
        }
    }

    #[test]
    fn hash_stays_in_unit_interval() {
        for x in 0..64 {
            for y in 0..64 {
                let t = hash_threshold(x, y, 7);
                assert!((0.0..1.0).contains(&t));
            }
        }
    }

    #[test]
    fn different_seeds_decorrelate() {
        let mut differing = 0;
        for x in 0..10 {
            for y in 0..10 {
                if hash_threshold(x, y, 1) != hash_threshold(x, y, 2) {
                    differing += 1;
                }
            }
        }
        assert!(differing > 90, "only {} of 100 thresholds differ", differing);
    }

    #[test]
    fn extremes_are_stable_regardless_of_noise() {
        for x in 0..32 {
            for y in 0..32 {
                assert_eq!(random_dither_value(1.0, x, y, 9, 2), 1.0);
                assert_eq!(random_dither_value(0.0, x, y, 9, 2), 0.0);
            }
        }
    }

    #[test]
    fn field_output_is_reproducible() {
        let field = IntensityField::from_rows(&vec![vec![0.5; 16]; 16]);
        let a = random_dither_field(&field, 3, 2);
        let b = random_dither_field(&field, 3, 2);
        assert_eq!(a, b);
    }
}
