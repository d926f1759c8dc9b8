// src/raster/polygon.rs

//! Polygon outlines and even-odd scanline fill.

use crate::buffer::CharBuffer;
use crate::config::{FillOptions, StrokeOptions};
use crate::raster::line::draw_line;

/// Draws a polygon outline by connecting consecutive vertices with line
/// primitives. The loop is closed back to the first vertex when `close`
/// is set and there are at least 3 vertices.
pub fn draw_polygon(buf: &mut CharBuffer, points: &[(f64, f64)], close: bool, opts: &StrokeOptions) {
    if points.len() < 2 {
        return;
    }
    for pair in points.windows(2) {
        draw_line(buf, pair[0].0, pair[0].1, pair[1].0, pair[1].1, opts);
    }
    if close && points.len() >= 3 {
        let first = points[0];
        let last = points[points.len() - 1];
        draw_line(buf, last.0, last.1, first.0, first.1, opts);
    }
}

/// Fills a polygon with the even-odd scanline rule.
///
/// For each integer row in the polygon's vertical range, every edge
/// crossing the scanline contributes one intersection (edges are half-open
/// in y: the lower endpoint is inclusive, the upper exclusive, so a vertex
/// shared by two edges is counted once). Intersections are sorted and the
/// spans between consecutive pairs are filled.
pub fn fill_polygon(buf: &mut CharBuffer, points: &[(f64, f64)], opts: &FillOptions) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    for y in min_y.round() as i64..=max_y.round() as i64 {
        let yc = y as f64;
        let mut xs: Vec<f64> = Vec::new();
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= yc && y1 > yc) || (y1 <= yc && y0 > yc) {
                let t = (yc - y0) / (y1 - y0);
                xs.push(x0 + t * (x1 - x0));
            }
        }
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in xs.chunks(2) {
            if let [xa, xb] = pair {
                for x in xa.round() as i64..=xb.round() as i64 {
                    buf.set_cell(x, y, opts.ch, opts.color, opts.depth);
                }
            }
        }
    }
}
