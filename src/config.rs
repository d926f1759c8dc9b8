// src/config.rs

//! Per-operation option structs with documented defaults.
//!
//! Every public drawing operation takes one of these flat option structs
//! instead of a loose parameter list. All of them deserialize with
//! missing-field defaults, so a host application can build them from a
//! partial JSON/TOML fragment and rely on the documented values for
//! everything it leaves out.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::dither::DitherAlgorithm;
use crate::palette::PaletteKind;
use crate::style::BoxStyle;

bitflags! {
    /// Which edges of a rectangle outline are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Borders: u8 {
        const TOP    = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
    }
}

/// Options for stroked path primitives (lines, polygon outlines, curves).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Explicit glyph for every cell. `None` derives the glyph from the
    /// local path direction and `style`.
    pub ch: Option<char>,
    /// Cell color.
    pub color: Color,
    /// Paint depth.
    pub depth: f64,
    /// Box-drawing style used when `ch` is `None`.
    pub style: BoxStyle,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        StrokeOptions {
            ch: None,
            color: Color::Default,
            depth: 0.0,
            style: BoxStyle::Single,
        }
    }
}

/// Options for the antialiased (Wu) line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AaLineOptions {
    /// Palette that coverage values are mapped through; higher coverage
    /// picks a denser glyph.
    pub palette: PaletteKind,
    /// Flip the palette ramp (dense glyphs for low coverage).
    pub reverse_palette: bool,
    /// Cell color.
    pub color: Color,
    /// Paint depth. Endpoint cells are written a hair above this so they
    /// always survive overlapping interior writes.
    pub depth: f64,
}

impl Default for AaLineOptions {
    fn default() -> Self {
        AaLineOptions {
            palette: PaletteKind::Standard,
            reverse_palette: false,
            color: Color::Default,
            depth: 0.0,
        }
    }
}

/// Options for ellipse and circle outlines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseOptions {
    /// Glyph plotted at every outline cell.
    pub ch: char,
    /// Cell color.
    pub color: Color,
    /// Paint depth.
    pub depth: f64,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        EllipseOptions {
            ch: '*',
            color: Color::Default,
            depth: 0.0,
        }
    }
}

/// Options for rectangle outlines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RectOptions {
    /// Box-drawing style for edges and corners.
    pub style: BoxStyle,
    /// Cell color.
    pub color: Color,
    /// Paint depth.
    pub depth: f64,
    /// Which edges to draw. Defaults to all four.
    pub borders: Borders,
}

impl Default for RectOptions {
    fn default() -> Self {
        RectOptions {
            style: BoxStyle::Single,
            color: Color::Default,
            depth: 0.0,
            borders: Borders::all(),
        }
    }
}

/// Options for area fills (filled rectangle interior, ellipse fill,
/// polygon fill).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    /// Glyph painted into every interior cell.
    pub ch: char,
    /// Cell color.
    pub color: Color,
    /// Paint depth.
    pub depth: f64,
}

impl Default for FillOptions {
    fn default() -> Self {
        FillOptions {
            ch: '#',
            color: Color::Default,
            depth: 0.0,
        }
    }
}

/// Options for the filled rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FilledRectOptions {
    /// Interior fill glyph.
    pub ch: char,
    /// Border style; `None` fills without a border. The border is drawn
    /// slightly above `depth` so the fill never occludes it.
    pub border: Option<BoxStyle>,
    /// Cell color for both fill and border.
    pub color: Color,
    /// Paint depth of the interior.
    pub depth: f64,
}

impl Default for FilledRectOptions {
    fn default() -> Self {
        FilledRectOptions {
            ch: '#',
            border: Some(BoxStyle::Single),
            color: Color::Default,
            depth: 0.0,
        }
    }
}

/// Options for flood fill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FloodOptions {
    /// Glyph painted into every reached cell.
    pub ch: char,
    /// Cell color.
    pub color: Color,
    /// Character to replace. `None` targets whatever occupies the start
    /// cell.
    pub target: Option<char>,
}

impl Default for FloodOptions {
    fn default() -> Self {
        FloodOptions {
            ch: '#',
            color: Color::Default,
            target: None,
        }
    }
}

/// Options for Bézier curves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    /// Stroke applied to every flattened segment.
    pub stroke: StrokeOptions,
    /// Number of flattening segments. `None` uses 20 for quadratic and 30
    /// for cubic curves.
    pub segments: Option<u32>,
}

impl Default for CurveOptions {
    fn default() -> Self {
        CurveOptions {
            stroke: StrokeOptions::default(),
            segments: None,
        }
    }
}

/// Options for linear gradient fills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientOptions {
    /// Palette the density ramp is mapped through.
    pub palette: PaletteKind,
    /// Run the ramp dense-to-empty instead of empty-to-dense.
    pub reverse: bool,
    /// Cell color.
    pub color: Color,
    /// Paint depth.
    pub depth: f64,
}

impl Default for GradientOptions {
    fn default() -> Self {
        GradientOptions {
            palette: PaletteKind::Standard,
            reverse: false,
            color: Color::Default,
            depth: 0.0,
        }
    }
}

/// Options for tiling pattern fills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Cell color.
    pub color: Color,
    /// Paint depth.
    pub depth: f64,
}

impl Default for PatternOptions {
    fn default() -> Self {
        PatternOptions {
            color: Color::Default,
            depth: 0.0,
        }
    }
}

/// Options for the dithering driver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DitherOptions {
    /// Quantization algorithm.
    pub algorithm: DitherAlgorithm,
    /// Palette the quantized densities are mapped through.
    pub palette: PaletteKind,
    /// Flip the palette ramp.
    pub reverse_palette: bool,
    /// Number of output levels. `None` uses the palette length.
    pub levels: Option<usize>,
    /// Seed for the deterministic random-threshold algorithm.
    pub seed: u64,
}

impl Default for DitherOptions {
    fn default() -> Self {
        DitherOptions {
            algorithm: DitherAlgorithm::Bayer4,
            palette: PaletteKind::Standard,
            reverse_palette: false,
            levels: None,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let stroke = StrokeOptions::default();
        assert_eq!(stroke.ch, None);
        assert_eq!(stroke.style, BoxStyle::Single);
        assert_eq!(stroke.depth, 0.0);

        let rect = RectOptions::default();
        assert_eq!(rect.borders, Borders::all());

        let dither = DitherOptions::default();
        assert_eq!(dither.algorithm, DitherAlgorithm::Bayer4);
        assert_eq!(dither.palette, PaletteKind::Standard);
        assert_eq!(dither.levels, None);
    }

    #[test]
    fn options_deserialize_from_partial_fragments() {
        let opts: DitherOptions =
            serde_json::from_str(r#"{ "algorithm": "floyd-steinberg" }"#).unwrap();
        assert_eq!(opts.algorithm, DitherAlgorithm::FloydSteinberg);
        assert_eq!(opts.palette, PaletteKind::Standard);

        let stroke: StrokeOptions = serde_json::from_str(r#"{ "style": "double" }"#).unwrap();
        assert_eq!(stroke.style, BoxStyle::Double);
    }
}
