// src/color.rs

//! Semantic color types for character-cell painting.
//!
//! Cells carry a [`Color`] token rather than a concrete pixel format; the
//! serializers that consume buffer views decide how to realize it (CSS
//! string, ANSI escape, ...). `Color::Default` means "inherit whatever the
//! output medium's default is" and is the color of every cleared cell.

use serde::{Deserialize, Serialize};

/// Standard ANSI named colors (indices 0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedColor {
    /// ANSI Black.
    Black,
    /// ANSI Red.
    Red,
    /// ANSI Green.
    Green,
    /// ANSI Yellow.
    Yellow,
    /// ANSI Blue.
    Blue,
    /// ANSI Magenta.
    Magenta,
    /// ANSI Cyan.
    Cyan,
    /// ANSI White.
    White,
    /// ANSI Bright Black.
    BrightBlack,
    /// ANSI Bright Red.
    BrightRed,
    /// ANSI Bright Green.
    BrightGreen,
    /// ANSI Bright Yellow.
    BrightYellow,
    /// ANSI Bright Blue.
    BrightBlue,
    /// ANSI Bright Magenta.
    BrightMagenta,
    /// ANSI Bright Cyan.
    BrightCyan,
    /// ANSI Bright White.
    BrightWhite,
}

impl NamedColor {
    /// Returns the RGB representation of this named color.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::Red => (205, 0, 0),
            NamedColor::Green => (0, 205, 0),
            NamedColor::Yellow => (205, 205, 0),
            NamedColor::Blue => (0, 0, 238),
            NamedColor::Magenta => (205, 0, 205),
            NamedColor::Cyan => (0, 205, 205),
            NamedColor::White => (229, 229, 229),
            NamedColor::BrightBlack => (127, 127, 127),
            NamedColor::BrightRed => (255, 0, 0),
            NamedColor::BrightGreen => (0, 255, 0),
            NamedColor::BrightYellow => (255, 255, 0),
            NamedColor::BrightBlue => (92, 92, 255),
            NamedColor::BrightMagenta => (255, 0, 255),
            NamedColor::BrightCyan => (0, 255, 255),
            NamedColor::BrightWhite => (255, 255, 255),
        }
    }
}

/// Represents a semantic color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Inherit the output medium's default color.
    #[default]
    Default,
    /// A standard named ANSI color (indices 0-15).
    Named(NamedColor),
    /// An indexed color from the 256-color palette (indices 0-255).
    Indexed(u8),
    /// An RGB true color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resolves this color to RGB, using `default` for `Color::Default`.
    ///
    /// Indexed colors resolve through the standard 256-color layout: the 16
    /// named colors, the 6x6x6 color cube (16-231), and the grayscale ramp
    /// (232-255).
    pub fn to_rgb(self, default: (u8, u8, u8)) -> (u8, u8, u8) {
        match self {
            Color::Default => default,
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Indexed(idx) => indexed_to_rgb(idx),
        }
    }
}

/// Convert an indexed color (0-255) to RGB.
fn indexed_to_rgb(idx: u8) -> (u8, u8, u8) {
    const BASIC: [(u8, u8, u8); 16] = [
        (0, 0, 0),       // 0: Black
        (205, 0, 0),     // 1: Red
        (0, 205, 0),     // 2: Green
        (205, 205, 0),   // 3: Yellow
        (0, 0, 238),     // 4: Blue
        (205, 0, 205),   // 5: Magenta
        (0, 205, 205),   // 6: Cyan
        (229, 229, 229), // 7: White
        (127, 127, 127), // 8: Bright Black
        (255, 0, 0),     // 9: Bright Red
        (0, 255, 0),     // 10: Bright Green
        (255, 255, 0),   // 11: Bright Yellow
        (92, 92, 255),   // 12: Bright Blue
        (255, 0, 255),   // 13: Bright Magenta
        (0, 255, 255),   // 14: Bright Cyan
        (255, 255, 255), // 15: Bright White
    ];

    if idx < 16 {
        BASIC[idx as usize]
    } else if idx < 232 {
        // 6x6x6 color cube (indices 16-231)
        let idx = idx - 16;
        let r = (idx / 36) % 6;
        let g = (idx / 6) % 6;
        let b = idx % 6;
        let scale = |c: u8| if c == 0 { 0 } else { 55 + c * 40 };
        (scale(r), scale(g), scale(b))
    } else {
        // Grayscale ramp (indices 232-255)
        let gray = 8 + (idx - 232) * 10;
        (gray, gray, gray)
    }
}
