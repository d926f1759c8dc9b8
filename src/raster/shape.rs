// src/raster/shape.rs

//! Rectangle, ellipse, circle, and arc primitives.

use crate::buffer::CharBuffer;
use crate::config::{Borders, EllipseOptions, FillOptions, FilledRectOptions, RectOptions, StrokeOptions};
use crate::raster::line::draw_line;

/// Horizontal scale applied to circle radii to compensate for character
/// cells being roughly twice as tall as they are wide.
pub const CIRCLE_ASPECT: f64 = 2.0;

/// Depth bump for a filled rectangle's border, so the fill never occludes
/// it.
const BORDER_DEPTH_BIAS: f64 = 0.001;

/// Draws a rectangle outline with box-drawing glyphs.
///
/// `width`/`height` are in cells; non-positive dimensions are a no-op. A
/// 1x1 rectangle degenerates to the style's cross glyph, and 1-wide /
/// 1-tall rectangles to a straight edge run. `opts.borders` selects which
/// edges of a full rectangle are drawn; a corner takes its corner glyph
/// when both adjacent edges are enabled and an edge glyph when only one
/// is.
pub fn draw_rect(buf: &mut CharBuffer, x: i64, y: i64, width: i64, height: i64, opts: &RectOptions) {
    if width <= 0 || height <= 0 {
        return;
    }
    let g = opts.style.glyphs();
    if width == 1 && height == 1 {
        buf.set_cell(x, y, g.cross, opts.color, opts.depth);
        return;
    }
    if width == 1 {
        for yy in y..y + height {
            buf.set_cell(x, yy, g.vertical, opts.color, opts.depth);
        }
        return;
    }
    if height == 1 {
        for xx in x..x + width {
            buf.set_cell(xx, y, g.horizontal, opts.color, opts.depth);
        }
        return;
    }

    let x1 = x + width - 1;
    let y1 = y + height - 1;
    let b = opts.borders;

    if b.contains(Borders::TOP) {
        for xx in x + 1..x1 {
            buf.set_cell(xx, y, g.horizontal, opts.color, opts.depth);
        }
    }
    if b.contains(Borders::BOTTOM) {
        for xx in x + 1..x1 {
            buf.set_cell(xx, y1, g.horizontal, opts.color, opts.depth);
        }
    }
    if b.contains(Borders::LEFT) {
        for yy in y + 1..y1 {
            buf.set_cell(x, yy, g.vertical, opts.color, opts.depth);
        }
    }
    if b.contains(Borders::RIGHT) {
        for yy in y + 1..y1 {
            buf.set_cell(x1, yy, g.vertical, opts.color, opts.depth);
        }
    }

    let corner = |horizontal: bool, vertical: bool, both: char| -> Option<char> {
        match (horizontal, vertical) {
            (true, true) => Some(both),
            (true, false) => Some(g.horizontal),
            (false, true) => Some(g.vertical),
            (false, false) => None,
        }
    };
    let corners = [
        (x, y, corner(b.contains(Borders::TOP), b.contains(Borders::LEFT), g.top_left)),
        (x1, y, corner(b.contains(Borders::TOP), b.contains(Borders::RIGHT), g.top_right)),
        (x, y1, corner(b.contains(Borders::BOTTOM), b.contains(Borders::LEFT), g.bottom_left)),
        (x1, y1, corner(b.contains(Borders::BOTTOM), b.contains(Borders::RIGHT), g.bottom_right)),
    ];
    for (cx, cy, glyph) in corners {
        if let Some(ch) = glyph {
            buf.set_cell(cx, cy, ch, opts.color, opts.depth);
        }
    }
}

/// Draws a filled rectangle: interior first, then (optionally) the border
/// slightly above it.
pub fn fill_rect(
    buf: &mut CharBuffer,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    opts: &FilledRectOptions,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    for yy in y..y + height {
        for xx in x..x + width {
            buf.set_cell(xx, yy, opts.ch, opts.color, opts.depth);
        }
    }
    if let Some(style) = opts.border {
        draw_rect(
            buf,
            x,
            y,
            width,
            height,
            &RectOptions {
                style,
                color: opts.color,
                depth: opts.depth + BORDER_DEPTH_BIAS,
                borders: Borders::all(),
            },
        );
    }
}

fn plot_symmetric(
    buf: &mut CharBuffer,
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    opts: &EllipseOptions,
) {
    buf.set_cell(cx + x, cy + y, opts.ch, opts.color, opts.depth);
    buf.set_cell(cx - x, cy + y, opts.ch, opts.color, opts.depth);
    buf.set_cell(cx + x, cy - y, opts.ch, opts.color, opts.depth);
    buf.set_cell(cx - x, cy - y, opts.ch, opts.color, opts.depth);
}

/// Draws an ellipse outline with the midpoint algorithm.
///
/// Two-region form: region 1 while the tangent slope is shallower than
/// -1, region 2 after. All four symmetric points are plotted per computed
/// offset; only integer accumulator arithmetic runs after setup.
pub fn draw_ellipse(buf: &mut CharBuffer, cx: i64, cy: i64, rx: i64, ry: i64, opts: &EllipseOptions) {
    if rx <= 0 || ry <= 0 {
        return;
    }
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let mut x = 0i64;
    let mut y = ry;
    let mut dx = 2 * ry2 * x;
    let mut dy = 2 * rx2 * y;

    // Region 1.
    let mut d1 = ry2 as f64 - (rx2 * ry) as f64 + 0.25 * rx2 as f64;
    while dx < dy {
        plot_symmetric(buf, cx, cy, x, y, opts);
        if d1 < 0.0 {
            x += 1;
            dx += 2 * ry2;
            d1 += (dx + ry2) as f64;
        } else {
            x += 1;
            y -= 1;
            dx += 2 * ry2;
            dy -= 2 * rx2;
            d1 += (dx - dy + ry2) as f64;
        }
    }

    // Region 2.
    let mut d2 = ry2 as f64 * (x as f64 + 0.5).powi(2) + (rx2 * (y - 1) * (y - 1)) as f64
        - (rx2 * ry2) as f64;
    while y >= 0 {
        plot_symmetric(buf, cx, cy, x, y, opts);
        if d2 > 0.0 {
            y -= 1;
            dy -= 2 * rx2;
            d2 += (rx2 as f64) - dy as f64;
        } else {
            y -= 1;
            x += 1;
            dx += 2 * ry2;
            dy -= 2 * rx2;
            d2 += (dx - dy + rx2) as f64;
        }
    }
}

/// Draws a circle outline.
///
/// A circle is an ellipse whose X radius is scaled by [`CIRCLE_ASPECT`] to
/// come out round on non-square character cells.
pub fn draw_circle(buf: &mut CharBuffer, cx: i64, cy: i64, radius: i64, opts: &EllipseOptions) {
    draw_ellipse(
        buf,
        cx,
        cy,
        (radius as f64 * CIRCLE_ASPECT).round() as i64,
        radius,
        opts,
    );
}

/// Fills an ellipse by testing every bounding-box cell against the
/// normalized ellipse equation `(x/rx)^2 + (y/ry)^2 <= 1`.
pub fn fill_ellipse(buf: &mut CharBuffer, cx: i64, cy: i64, rx: i64, ry: i64, opts: &FillOptions) {
    if rx <= 0 || ry <= 0 {
        return;
    }
    for yy in cy - ry..=cy + ry {
        for xx in cx - rx..=cx + rx {
            let nx = (xx - cx) as f64 / rx as f64;
            let ny = (yy - cy) as f64 / ry as f64;
            if nx * nx + ny * ny <= 1.0 {
                buf.set_cell(xx, yy, opts.ch, opts.color, opts.depth);
            }
        }
    }
}

/// Fills a circle, with the same aspect-ratio compensation as
/// [`draw_circle`].
pub fn fill_circle(buf: &mut CharBuffer, cx: i64, cy: i64, radius: i64, opts: &FillOptions) {
    fill_ellipse(
        buf,
        cx,
        cy,
        (radius as f64 * CIRCLE_ASPECT).round() as i64,
        radius,
        opts,
    );
}

/// Draws a circular arc from `start_angle` to `end_angle` (radians).
///
/// The segment count grows with arc length — `max(10, ceil(span * radius
/// / 2))` — so longer and larger arcs are sampled proportionally finer.
/// Points come from the ellipse parametric form with the circle
/// aspect-ratio compensation applied to X.
pub fn draw_arc(
    buf: &mut CharBuffer,
    cx: f64,
    cy: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    opts: &StrokeOptions,
) {
    if radius <= 0.0 {
        return;
    }
    let span = (end_angle - start_angle).abs();
    if span == 0.0 {
        return;
    }
    let segments = ((span * radius / 2.0).ceil() as i64).max(10);

    let point = |t: f64| {
        (
            cx + t.cos() * radius * CIRCLE_ASPECT,
            cy + t.sin() * radius,
        )
    };
    let mut prev = point(start_angle);
    for i in 1..=segments {
        let t = start_angle + (end_angle - start_angle) * i as f64 / segments as f64;
        let p = point(t);
        draw_line(buf, prev.0, prev.1, p.0, p.1, opts);
        prev = p;
    }
}
