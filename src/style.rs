// src/style.rs

//! Box-drawing styles: named glyph sets for line and rectangle primitives.
//!
//! A style supplies the straight-edge, corner, and junction glyphs that
//! primitives use when the caller does not pass an explicit character.
//! Unknown style names fall back to `single` with a logged warning.

use log::warn;
use serde::{Deserialize, Serialize};

/// The glyphs of one box-drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Four-way junction, also the 1x1 degenerate rectangle.
    pub cross: char,
    /// Rising diagonal.
    pub diag_up: char,
    /// Falling diagonal.
    pub diag_down: char,
}

/// Named box-drawing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxStyle {
    /// Light single-stroke box drawing.
    #[default]
    Single,
    /// Double-stroke box drawing.
    Double,
    /// Single-stroke with rounded corners.
    Rounded,
    /// Heavy single-stroke box drawing.
    Heavy,
    /// Plain ASCII (`-`, `|`, `+`).
    Ascii,
}

const SINGLE: BoxGlyphs = BoxGlyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    cross: '┼',
    diag_up: '/',
    diag_down: '\\',
};

const DOUBLE: BoxGlyphs = BoxGlyphs {
    horizontal: '═',
    vertical: '║',
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    cross: '╬',
    diag_up: '/',
    diag_down: '\\',
};

const ROUNDED: BoxGlyphs = BoxGlyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    cross: '┼',
    diag_up: '/',
    diag_down: '\\',
};

const HEAVY: BoxGlyphs = BoxGlyphs {
    horizontal: '━',
    vertical: '┃',
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    cross: '╋',
    diag_up: '/',
    diag_down: '\\',
};

const ASCII: BoxGlyphs = BoxGlyphs {
    horizontal: '-',
    vertical: '|',
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    cross: '+',
    diag_up: '/',
    diag_down: '\\',
};

impl BoxStyle {
    /// Parses a style name, defaulting to `Single` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "single" => BoxStyle::Single,
            "double" => BoxStyle::Double,
            "rounded" => BoxStyle::Rounded,
            "heavy" => BoxStyle::Heavy,
            "ascii" => BoxStyle::Ascii,
            _ => {
                warn!("Unknown box style: '{}'. Defaulting to single.", name);
                BoxStyle::Single
            }
        }
    }

    /// The glyph set for this style.
    #[must_use]
    pub fn glyphs(self) -> &'static BoxGlyphs {
        match self {
            BoxStyle::Single => &SINGLE,
            BoxStyle::Double => &DOUBLE,
            BoxStyle::Rounded => &ROUNDED,
            BoxStyle::Heavy => &HEAVY,
            BoxStyle::Ascii => &ASCII,
        }
    }

    /// Selects the glyph for a local path direction.
    ///
    /// `dx`/`dy` are the signs of the step between the path points on
    /// either side of the cell being drawn. Pure horizontal or vertical
    /// motion picks the straight edge glyph, anything else a diagonal;
    /// a degenerate zero direction (single-point path) picks the cross.
    #[must_use]
    pub fn glyph_for_direction(self, dx: i64, dy: i64) -> char {
        let glyphs = self.glyphs();
        match (dx.signum(), dy.signum()) {
            (0, 0) => glyphs.cross,
            (_, 0) => glyphs.horizontal,
            (0, _) => glyphs.vertical,
            (x, y) if x == y => glyphs.diag_down,
            _ => glyphs.diag_up,
        }
    }
}
