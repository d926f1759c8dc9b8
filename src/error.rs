// src/error.rs

//! Error types for the glyphflow library.
//!
//! Per-cell operations never fail: out-of-bounds coordinates, unknown
//! palette/style names, and unknown characters all resolve to documented
//! defaults. The only conditions surfaced as typed errors are structurally
//! unusable inputs — a buffer with a zero dimension and a palette with no
//! characters.

/// Error returned when constructing or resizing a character grid buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height was zero. Both must be at least 1.
    InvalidDimensions {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::InvalidDimensions { width, height } => {
                write!(f, "invalid buffer dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Error returned when sampling a density palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// The palette contains no characters and cannot be sampled.
    Empty,
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::Empty => write!(f, "palette contains no characters"),
        }
    }
}

impl std::error::Error for PaletteError {}
