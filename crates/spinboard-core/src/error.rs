//! Error handling for Spinboard
//!
//! The interaction core itself is pure arithmetic and deterministic geometric
//! tests, so errors only arise at the edges: malformed shape definitions,
//! unparseable color literals, and unusable surface dimensions.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Spinboard error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A polygon was defined with too few vertices to enclose an area
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    DegeneratePolygon {
        /// The number of vertices supplied.
        vertices: usize,
    },

    /// A color literal could not be parsed
    #[error("unrecognized color literal: {value:?}")]
    InvalidColor {
        /// The literal that failed to parse.
        value: String,
    },

    /// The requested drawing surface has unusable dimensions
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidSurface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// Result type alias using the Spinboard error
pub type Result<T> = std::result::Result<T, Error>;
