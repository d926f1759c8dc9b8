// src/raster/curve.rs

//! Bézier curve flattening.
//!
//! Curves are flattened at a fixed segment count (a quality/performance
//! trade-off, deliberately not adaptive) and each segment is drawn with
//! the line primitive, so curves inherit the line's direction-derived
//! glyph selection.

use crate::buffer::CharBuffer;
use crate::config::CurveOptions;
use crate::raster::line::draw_line;

/// Default flattening segments for quadratic curves.
const QUAD_SEGMENTS: u32 = 20;
/// Default flattening segments for cubic curves.
const CUBIC_SEGMENTS: u32 = 30;

fn draw_flattened(
    buf: &mut CharBuffer,
    segments: u32,
    opts: &CurveOptions,
    eval: impl Fn(f64) -> (f64, f64),
) {
    let segments = segments.max(1);
    let mut prev = eval(0.0);
    for i in 1..=segments {
        let p = eval(i as f64 / segments as f64);
        draw_line(buf, prev.0, prev.1, p.0, p.1, &opts.stroke);
        prev = p;
    }
}

/// Draws a quadratic Bézier curve through the standard blending
/// polynomial `(1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`.
pub fn draw_quad_bezier(
    buf: &mut CharBuffer,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    opts: &CurveOptions,
) {
    let segments = opts.segments.unwrap_or(QUAD_SEGMENTS);
    draw_flattened(buf, segments, opts, |t| {
        let u = 1.0 - t;
        (
            u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0,
            u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1,
        )
    });
}

/// Draws a cubic Bézier curve through the standard blending polynomial
/// `(1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3`.
pub fn draw_cubic_bezier(
    buf: &mut CharBuffer,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    opts: &CurveOptions,
) {
    let segments = opts.segments.unwrap_or(CUBIC_SEGMENTS);
    draw_flattened(buf, segments, opts, |t| {
        let u = 1.0 - t;
        (
            u * u * u * p0.0 + 3.0 * u * u * t * p1.0 + 3.0 * u * t * t * p2.0 + t * t * t * p3.0,
            u * u * u * p0.1 + 3.0 * u * u * t * p1.1 + 3.0 * u * t * t * p2.1 + t * t * t * p3.1,
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrokeOptions;

    fn star_opts() -> CurveOptions {
        CurveOptions {
            stroke: StrokeOptions {
                ch: Some('*'),
                ..Default::default()
            },
            segments: None,
        }
    }

    #[test]
    fn quad_bezier_hits_its_endpoints() {
        let mut buf = CharBuffer::new(12, 8).unwrap();
        draw_quad_bezier(&mut buf, (0.0, 7.0), (5.0, -7.0), (11.0, 7.0), &star_opts());
        assert_eq!(buf.char_at(0, 7), '*');
        assert_eq!(buf.char_at(11, 7), '*');
        // The curve's apex pulls toward the control point.
        let top_painted = (0..12).any(|x| buf.char_at(x, 0) == '*');
        assert!(top_painted);
    }

    #[test]
    fn cubic_bezier_hits_its_endpoints() {
        let mut buf = CharBuffer::new(12, 8).unwrap();
        draw_cubic_bezier(
            &mut buf,
            (0.0, 0.0),
            (4.0, 14.0),
            (7.0, -6.0),
            (11.0, 7.0),
            &star_opts(),
        );
        assert_eq!(buf.char_at(0, 0), '*');
        assert_eq!(buf.char_at(11, 7), '*');
    }

    #[test]
    fn degenerate_curve_is_a_point() {
        let mut buf = CharBuffer::new(3, 3).unwrap();
        draw_quad_bezier(&mut buf, (1.0, 1.0), (1.0, 1.0), (1.0, 1.0), &star_opts());
        assert_eq!(buf.char_at(1, 1), '*');
        // Nothing else painted.
        let painted = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|&(x, y)| buf.char_at(x, y) == '*')
            .count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn segment_override_is_respected() {
        // One segment turns the curve into its chord.
        let mut buf = CharBuffer::new(10, 5).unwrap();
        let opts = CurveOptions {
            stroke: StrokeOptions {
                ch: Some('*'),
                ..Default::default()
            },
            segments: Some(1),
        };
        draw_quad_bezier(&mut buf, (0.0, 4.0), (5.0, -20.0), (9.0, 4.0), &opts);
        // The chord is the straight line y=4.
        for x in 0..10 {
            assert_eq!(buf.char_at(x, 4), '*');
        }
        assert_eq!(buf.char_at(5, 0), ' ');
    }
}
