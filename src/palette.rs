// src/palette.rs

//! Density palettes: ordered character ramps from empty to dense.
//!
//! A palette discretizes the continuous density range [0, 1] into glyphs.
//! Index 0 is the emptiest/lightest glyph, the last index is the
//! densest/darkest, and the mapping between index and density is affine:
//! `density = index / (len - 1)`. Lookup is invertible in both directions
//! with that same formula, rounding (not truncating) density to the
//! nearest index.
//!
//! Unknown palette names fall back to [`PaletteKind::Standard`] with a
//! logged warning rather than failing; the only hard error is sampling a
//! palette with no characters at all.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Density returned for characters that are not part of the palette.
const NEUTRAL_DENSITY: f64 = 0.5;

/// The built-in density ramps, emptiest glyph first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    /// Classic 10-step ASCII ramp: ` .:-=+*#%@`.
    #[default]
    Standard,
    /// Unicode block shades: ` ░▒▓█`.
    Blocks,
    /// Small 5-step ramp: ` .oO@`.
    Minimal,
    /// Braille density ramp.
    Dots,
    /// The long classic ASCII grayscale ramp.
    AsciiFull,
}

impl PaletteKind {
    /// Parses a palette name.
    ///
    /// Returns `Standard` for unknown names (a name like `blocks-reverse`
    /// is handled by [`Palette::from_name`], which strips the suffix before
    /// calling this).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "standard" => PaletteKind::Standard,
            "blocks" => PaletteKind::Blocks,
            "minimal" => PaletteKind::Minimal,
            "dots" => PaletteKind::Dots,
            "ascii-full" => PaletteKind::AsciiFull,
            _ => {
                warn!("Unknown palette name: '{}'. Defaulting to standard.", name);
                PaletteKind::Standard
            }
        }
    }

    /// The ramp characters for this palette, emptiest first.
    #[must_use]
    pub fn ramp(self) -> &'static str {
        match self {
            PaletteKind::Standard => " .:-=+*#%@",
            PaletteKind::Blocks => " ░▒▓█",
            PaletteKind::Minimal => " .oO@",
            PaletteKind::Dots => " ⠁⠃⠇⠏⠟⠿⡿⣿",
            PaletteKind::AsciiFull => {
                " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$"
            }
        }
    }
}

/// An ordered character ramp used as a discretization of density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Creates a palette from an explicit ramp string, emptiest glyph first.
    ///
    /// An empty ramp is permitted here but every sampling call on it will
    /// return [`PaletteError::Empty`].
    #[must_use]
    pub fn new(ramp: &str) -> Self {
        Palette {
            glyphs: ramp.chars().collect(),
        }
    }

    /// Creates one of the built-in palettes.
    #[must_use]
    pub fn from_kind(kind: PaletteKind) -> Self {
        Palette::new(kind.ramp())
    }

    /// Creates a palette by name, accepting a `-reverse` suffix.
    ///
    /// `"blocks-reverse"` is the `blocks` ramp densest-first. Unknown base
    /// names fall back to `standard` with a logged warning.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.strip_suffix("-reverse") {
            Some(base) => Palette::from_kind(PaletteKind::from_name(base)).reversed(),
            None => Palette::from_kind(PaletteKind::from_name(name)),
        }
    }

    /// This palette with the ramp order flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Palette {
            glyphs: self.glyphs.iter().rev().copied().collect(),
        }
    }

    /// Number of glyphs in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if the ramp has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Maps a density in [0, 1] to the nearest ramp glyph.
    ///
    /// Density is clamped to [0, 1] first; the index is chosen by rounding
    /// `density * (len - 1)`.
    pub fn density_to_char(&self, density: f64) -> Result<char, PaletteError> {
        if self.glyphs.is_empty() {
            return Err(PaletteError::Empty);
        }
        if self.glyphs.len() == 1 {
            return Ok(self.glyphs[0]);
        }
        let d = density.clamp(0.0, 1.0);
        let index = (d * (self.glyphs.len() - 1) as f64).round() as usize;
        Ok(self.glyphs[index])
    }

    /// Maps a ramp glyph back to its density.
    ///
    /// Characters absent from the palette (and every character of a
    /// degenerate single-glyph palette) yield the neutral density 0.5 —
    /// unknown glyphs degrade gracefully rather than failing.
    #[must_use]
    pub fn char_to_density(&self, ch: char) -> f64 {
        if self.glyphs.len() < 2 {
            return NEUTRAL_DENSITY;
        }
        match self.glyphs.iter().position(|&g| g == ch) {
            Some(index) => index as f64 / (self.glyphs.len() - 1) as f64,
            None => NEUTRAL_DENSITY,
        }
    }

    /// Maps an 8-bit brightness to a ramp glyph.
    ///
    /// Brightness is normalized to density; `invert` flips it (`1 - d`),
    /// for output media where bright pixels should map to empty glyphs.
    pub fn brightness_to_char(&self, brightness: u8, invert: bool) -> Result<char, PaletteError> {
        let mut density = brightness as f64 / 255.0;
        if invert {
            density = 1.0 - density;
        }
        self.density_to_char(density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_index() {
        for kind in [
            PaletteKind::Standard,
            PaletteKind::Blocks,
            PaletteKind::Minimal,
            PaletteKind::Dots,
        ] {
            let palette = Palette::from_kind(kind);
            let n = palette.len();
            for (i, ch) in kind.ramp().chars().enumerate() {
                let density = i as f64 / (n - 1) as f64;
                assert_eq!(palette.density_to_char(density).unwrap(), ch);
                assert!((palette.char_to_density(ch) - density).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn density_is_clamped() {
        let palette = Palette::from_kind(PaletteKind::Standard);
        assert_eq!(palette.density_to_char(-3.0).unwrap(), ' ');
        assert_eq!(palette.density_to_char(42.0).unwrap(), '@');
    }

    #[test]
    fn density_rounds_to_nearest_index() {
        // 5 glyphs: indices at densities 0, 0.25, 0.5, 0.75, 1.
        let palette = Palette::from_kind(PaletteKind::Minimal);
        assert_eq!(palette.density_to_char(0.13).unwrap(), ' ');
        assert_eq!(palette.density_to_char(0.2).unwrap(), '.');
        assert_eq!(palette.density_to_char(0.62).unwrap(), 'O');
    }

    #[test]
    fn unknown_char_is_neutral() {
        let palette = Palette::from_kind(PaletteKind::Standard);
        assert_eq!(palette.char_to_density('Z'), 0.5);
    }

    #[test]
    fn empty_palette_is_an_error() {
        let palette = Palette::new("");
        assert_eq!(palette.density_to_char(0.5), Err(PaletteError::Empty));
    }

    #[test]
    fn single_glyph_palette_collapses() {
        let palette = Palette::new("#");
        assert_eq!(palette.density_to_char(0.0).unwrap(), '#');
        assert_eq!(palette.density_to_char(1.0).unwrap(), '#');
        assert_eq!(palette.char_to_density('#'), 0.5);
    }

    #[test]
    fn unknown_name_falls_back_to_standard() {
        let palette = Palette::from_name("no-such-palette");
        assert_eq!(palette.density_to_char(1.0).unwrap(), '@');
    }

    #[test]
    fn reverse_suffix_flips_the_ramp() {
        let palette = Palette::from_name("blocks-reverse");
        assert_eq!(palette.density_to_char(0.0).unwrap(), '█');
        assert_eq!(palette.density_to_char(1.0).unwrap(), ' ');
    }

    #[test]
    fn brightness_maps_through_density() {
        let palette = Palette::from_kind(PaletteKind::Standard);
        assert_eq!(palette.brightness_to_char(255, false).unwrap(), '@');
        assert_eq!(palette.brightness_to_char(255, true).unwrap(), ' ');
        assert_eq!(palette.brightness_to_char(0, false).unwrap(), ' ');
    }
}
