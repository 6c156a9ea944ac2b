//!    Error handling
//!
//! The font engine reports contract violations through the typed
//! [`FontError`] enum so callers can match on them. The command line layer
//! wraps everything in anyhow and adds file and glyph context on the way up.

use anyhow::{Context, Result};
use thiserror::Error as ThisError;

/// Errors raised by the glyph, catalog, codec and segmentation code
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FontError {
    #[error("raw data holds {actual} bytes, but a {width} x {height} glyph needs {expected}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("pixel ({x}, {y}) is outside of the {width} x {height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("glyph '{codepoint}' has no ink pixels to bound")]
    EmptyGlyph { codepoint: char },

    #[error("font contains no glyphs")]
    EmptyCatalog,

    #[error("glyph codepoint '{codepoint}' already present in font")]
    DuplicateCodepoint { codepoint: char },

    #[error("found {found} glyphs in image, but specification for {expected} glyphs")]
    GlyphCountMismatch { found: usize, expected: usize },

    #[error("codepoint {value:?} must be exactly one character")]
    InvalidCodepoint { value: String },

    #[error("glyph '{codepoint}' offsets overflow the coordinate range")]
    CoordinateOverflow { codepoint: char },

    #[error("glyph '{codepoint}' carries malformed hex data")]
    InvalidHexData { codepoint: char },
}

/// Result type alias for the command line layer
pub type FontResult<T> = Result<T>;

/// Helper functions for creating common error contexts
pub trait FontContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> FontResult<T>;

    /// Add glyph operation context to an error
    fn with_glyph_context(self, operation: &str, codepoint: char) -> FontResult<T>;
}

impl<T, E> FontContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> FontResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }

    fn with_glyph_context(self, operation: &str, codepoint: char) -> FontResult<T> {
        self.with_context(|| format!("Failed to {operation} glyph '{codepoint}'"))
    }
}
