//! Integration scenarios: intensity fields → dithered character output
//!
//! These tests drive the dithering driver end to end, including the
//! unknown-name fallback paths a host application relies on.

use glyphflow::buffer::CharBuffer;
use glyphflow::color::Color;
use glyphflow::config::DitherOptions;
use glyphflow::dither::{
    dither_field, dither_into, dither_to_chars, DitherAlgorithm, IntensityField,
};
use glyphflow::palette::{Palette, PaletteKind};
use glyphflow::style::BoxStyle;
use test_log::test;

#[test]
fn bayer_full_on_field_saturates() {
    // TEST: A uniform 1.0 field through every ordered matrix at 2 levels.
    let field = IntensityField::from_rows(&vec![vec![1.0; 16]; 16]);
    for algorithm in [
        DitherAlgorithm::Bayer2,
        DitherAlgorithm::Bayer4,
        DitherAlgorithm::Bayer8,
    ] {
        let opts = DitherOptions {
            algorithm,
            levels: Some(2),
            ..Default::default()
        };
        let out = dither_field(&field, &opts);

        // VERIFY: Every cell is at the maximum level, no mid-tone
        // artifacts at the extreme.
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(out.get(x, y), 1.0, "{:?} at ({}, {})", algorithm, x, y);
            }
        }
    }
}

#[test]
fn error_diffusion_tracks_mean_intensity() {
    // TEST: A uniform mid-gray field through the conserving kernels.
    let field = IntensityField::from_rows(&vec![vec![0.35; 16]; 16]);
    for algorithm in [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::JarvisJudiceNinke,
        DitherAlgorithm::Sierra,
        DitherAlgorithm::Stucki,
    ] {
        let opts = DitherOptions {
            algorithm,
            levels: Some(2),
            ..Default::default()
        };
        let out = dither_field(&field, &opts);

        // VERIFY: On/off output whose mean stays near the input mean.
        let mut total = 0.0;
        for y in 0..16 {
            for x in 0..16 {
                let v = out.get(x, y);
                assert!(v == 0.0 || v == 1.0);
                total += v;
            }
        }
        let mean = total / 256.0;
        assert!(
            (mean - 0.35).abs() < 0.08,
            "{:?} mean {} drifted from 0.35",
            algorithm,
            mean
        );
    }
}

#[test]
fn atkinson_renders_lighter_than_floyd_steinberg() {
    // TEST: The same dark-gray field through a conserving and the lossy
    // kernel.
    let field = IntensityField::from_rows(&vec![vec![0.3; 16]; 16]);
    let count_on = |algorithm: DitherAlgorithm| {
        let opts = DitherOptions {
            algorithm,
            levels: Some(2),
            ..Default::default()
        };
        let out = dither_field(&field, &opts);
        let mut on = 0;
        for y in 0..16 {
            for x in 0..16 {
                if out.get(x, y) > 0.5 {
                    on += 1;
                }
            }
        }
        on
    };

    // VERIFY: Atkinson activates fewer cells (its discarded error darkens
    // nothing downstream).
    assert!(count_on(DitherAlgorithm::Atkinson) < count_on(DitherAlgorithm::FloydSteinberg));
}

#[test]
fn driver_maps_a_gradient_through_the_palette() {
    // TEST: A left-to-right ramp dithered to characters.
    let width = 32usize;
    let ramp: Vec<f64> = (0..width).map(|x| x as f64 / (width - 1) as f64).collect();
    let field = IntensityField::from_rows(&vec![ramp; 8]);
    let opts = DitherOptions {
        algorithm: DitherAlgorithm::FloydSteinberg,
        palette: PaletteKind::Standard,
        ..Default::default()
    };
    let rows = dither_to_chars(&field, &opts);

    // VERIFY: Output glyphs all belong to the palette, and density rises
    // from the left edge to the right.
    let palette = Palette::from_kind(PaletteKind::Standard);
    let column_density = |x: usize| -> f64 {
        rows.iter().map(|row| palette.char_to_density(row[x])).sum::<f64>() / 8.0
    };
    assert!(column_density(0) < 0.2);
    assert!(column_density(width - 1) > 0.8);
    for row in &rows {
        for &ch in row {
            assert!(palette.char_to_density(ch) <= 1.0);
        }
    }
}

#[test]
fn unknown_names_fall_back_to_documented_defaults() {
    // TEST: Unknown algorithm, palette, and style names.
    let algorithm = DitherAlgorithm::from_name("definitely-not-real");
    let palette = Palette::from_name("definitely-not-real");
    let style = BoxStyle::from_name("definitely-not-real");

    // VERIFY: The documented defaults, not errors.
    assert_eq!(algorithm, DitherAlgorithm::Bayer4);
    assert_eq!(palette.density_to_char(1.0).unwrap(), '@');
    assert_eq!(style, BoxStyle::Single);
}

#[test]
fn dithered_field_composites_into_a_scene() {
    // TEST: Dither a bright field into a buffer that already has deeper
    // content.
    let mut buf = CharBuffer::new(8, 4).unwrap();
    buf.draw_text(0.0, 0.0, "TITLE", Color::Default, 10.0);
    let field = IntensityField::from_rows(&vec![vec![1.0; 8]; 4]);
    let opts = DitherOptions {
        algorithm: DitherAlgorithm::Bayer2,
        palette: PaletteKind::Blocks,
        levels: Some(2),
        ..Default::default()
    };
    dither_into(&mut buf, 0, 0, &field, &opts, Color::Default, 1.0);

    // VERIFY: The dither layer fills the buffer but loses to the deeper
    // text.
    assert_eq!(buf.char_at(0, 0), 'T');
    assert_eq!(buf.char_at(4, 0), 'E');
    assert_eq!(buf.char_at(6, 0), '█');
    assert_eq!(buf.char_at(0, 3), '█');
}

#[test]
fn halftone_pattern_is_binary_and_periodic() {
    // TEST: A mid-gray field through the clustered-dot pattern.
    let field = IntensityField::from_rows(&vec![vec![0.4; 16]; 16]);
    let opts = DitherOptions {
        algorithm: DitherAlgorithm::Halftone,
        ..Default::default()
    };
    let out = dither_field(&field, &opts);

    // VERIFY: On/off output repeating on the 4x4 matrix period.
    for y in 0..16usize {
        for x in 0..16usize {
            let v = out.get(x, y);
            assert!(v == 0.0 || v == 1.0);
            if x < 12 && y < 12 {
                assert_eq!(v, out.get(x + 4, y + 4));
            }
        }
    }
}
