// src/raster/mod.rs

//! Primitive rasterization: stateless algorithms that enumerate cells and
//! write them into a `CharBuffer`.
//!
//! Every primitive is defensive: zero or negative radii/dimensions are
//! no-ops, and all writes route through the buffer's bounds-checked
//! `set_cell`, so no primitive can fail on an out-of-range coordinate.

pub mod curve;
pub mod fill;
pub mod flood;
pub mod line;
pub mod polygon;
pub mod shape;

pub use curve::{draw_cubic_bezier, draw_quad_bezier};
pub use fill::{gradient_fill, pattern_fill, GradientDirection};
pub use flood::flood_fill;
pub use line::{draw_line, draw_line_aa, line_cells};
pub use polygon::{draw_polygon, fill_polygon};
pub use shape::{
    draw_arc, draw_circle, draw_ellipse, draw_rect, fill_circle, fill_ellipse, fill_rect,
    CIRCLE_ASPECT,
};
