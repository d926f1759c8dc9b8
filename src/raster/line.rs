// src/raster/line.rs

//! Line rasterization: integer Bresenham and Wu-style antialiasing.

use crate::buffer::CharBuffer;
use crate::config::{AaLineOptions, StrokeOptions};
use crate::palette::Palette;

/// Depth bump for antialiased endpoint cells, so they survive overlapping
/// interior writes of the same stroke.
const ENDPOINT_DEPTH_BIAS: f64 = 1e-6;

/// Enumerates the cells of the line between two integer endpoints.
///
/// Endpoints are put in canonical order before stepping, so calling with
/// the endpoints swapped yields the identical cell sequence. Exactly one
/// cell is produced per step along the dominant axis.
#[must_use]
pub fn line_cells(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    let (x0, y0, x1, y1) = if (x0, y0) <= (x1, y1) {
        (x0, y0, x1, y1)
    } else {
        (x1, y1, x0, y0)
    };
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        cells.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// Draws a straight line with Bresenham's algorithm.
///
/// Real coordinates are rounded to cells first. Without an explicit
/// character, each cell's glyph is chosen from the stroke's box style by
/// the local path direction (horizontal/vertical edge glyphs, `/` and `\`
/// for diagonals).
pub fn draw_line(
    buf: &mut CharBuffer,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    opts: &StrokeOptions,
) {
    let cells = line_cells(
        x0.round() as i64,
        y0.round() as i64,
        x1.round() as i64,
        y1.round() as i64,
    );
    for (i, &(x, y)) in cells.iter().enumerate() {
        let ch = match opts.ch {
            Some(ch) => ch,
            None => {
                // Direction from the neighboring path points on either side.
                let (px, py) = cells[i.saturating_sub(1)];
                let (nx, ny) = cells[(i + 1).min(cells.len() - 1)];
                opts.style.glyph_for_direction(nx - px, ny - py)
            }
        };
        buf.set_cell(x, y, ch, opts.color, opts.depth);
    }
}

fn fpart(v: f64) -> f64 {
    v - v.floor()
}

fn rfpart(v: f64) -> f64 {
    1.0 - fpart(v)
}

fn plot_coverage(
    buf: &mut CharBuffer,
    palette: &Palette,
    steep: bool,
    x: i64,
    y: i64,
    coverage: f64,
    opts: &AaLineOptions,
    depth: f64,
) {
    if coverage <= 0.0 {
        return;
    }
    let Ok(ch) = palette.density_to_char(coverage) else {
        return;
    };
    if steep {
        buf.set_cell(y, x, ch, opts.color, depth);
    } else {
        buf.set_cell(x, y, ch, opts.color, depth);
    }
}

/// Draws an antialiased line in the manner of Wu's algorithm.
///
/// The line operates on real endpoints; when it is steep the axes are
/// swapped so the main loop always advances along the shallow axis. Each
/// interior step plots a pair of cells whose fractional coverage picks a
/// density-weighted glyph from the palette.
///
/// Endpoint rule: the four endpoint cells carry their full vertical
/// coverage (no horizontal gap factor) and are written a hair above the
/// interior depth, so an endpoint cell always wins any overlap with the
/// interior loop — which itself runs over strictly interior columns.
pub fn draw_line_aa(
    buf: &mut CharBuffer,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    opts: &AaLineOptions,
) {
    let palette = if opts.reverse_palette {
        Palette::from_kind(opts.palette).reversed()
    } else {
        Palette::from_kind(opts.palette)
    };

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (y0, x0, y1, x1)
    } else {
        (x0, y0, x1, y1)
    };
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let gradient = if dx == 0.0 { 1.0 } else { (y1 - y0) / dx };
    let endpoint_depth = opts.depth + ENDPOINT_DEPTH_BIAS;

    // First endpoint.
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xpxl1 = xend as i64;
    let ypxl1 = yend.floor() as i64;
    plot_coverage(buf, &palette, steep, xpxl1, ypxl1, rfpart(yend), opts, endpoint_depth);
    plot_coverage(buf, &palette, steep, xpxl1, ypxl1 + 1, fpart(yend), opts, endpoint_depth);
    let mut intery = yend + gradient;

    // Second endpoint.
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xpxl2 = xend as i64;
    let ypxl2 = yend.floor() as i64;
    plot_coverage(buf, &palette, steep, xpxl2, ypxl2, rfpart(yend), opts, endpoint_depth);
    plot_coverage(buf, &palette, steep, xpxl2, ypxl2 + 1, fpart(yend), opts, endpoint_depth);

    // Interior: strictly between the endpoint columns.
    for x in (xpxl1 + 1)..xpxl2 {
        let y = intery.floor() as i64;
        plot_coverage(buf, &palette, steep, x, y, rfpart(intery), opts, opts.depth);
        plot_coverage(buf, &palette, steep, x, y + 1, fpart(intery), opts, opts.depth);
        intery += gradient;
    }
}
