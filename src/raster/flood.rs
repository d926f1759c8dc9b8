// src/raster/flood.rs

//! Stack-based 4-connected flood fill.

use crate::buffer::CharBuffer;
use crate::config::FloodOptions;

/// Flood-fills the region of matching characters around `(x, y)`.
///
/// The target character defaults to whatever occupies the start cell; the
/// fill terminates immediately if the fill character equals the target
/// (it would otherwise match itself forever). The traversal is an
/// explicit work stack plus a flat visited array sized to the buffer —
/// no recursion. Flood fill bypasses the depth test: reached cells are
/// overwritten regardless of their stored depth.
pub fn flood_fill(buf: &mut CharBuffer, x: i64, y: i64, opts: &FloodOptions) {
    let width = buf.width() as i64;
    let height = buf.height() as i64;
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    let target = opts.target.unwrap_or_else(|| buf.char_at(x, y));
    if opts.ch == target {
        return;
    }

    let mut visited = vec![false; (width * height) as usize];
    let mut stack = vec![(x, y)];
    while let Some((cx, cy)) = stack.pop() {
        if cx < 0 || cy < 0 || cx >= width || cy >= height {
            continue;
        }
        let index = (cy * width + cx) as usize;
        if visited[index] {
            continue;
        }
        visited[index] = true;
        if buf.char_at(cx, cy) != target {
            continue;
        }
        buf.overwrite_cell(cx, cy, opts.ch, opts.color);
        stack.push((cx + 1, cy));
        stack.push((cx - 1, cy));
        stack.push((cx, cy + 1));
        stack.push((cx, cy - 1));
    }
}
