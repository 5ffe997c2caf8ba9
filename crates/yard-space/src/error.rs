//! Error types for grid construction and cell access.

use std::fmt;
use yard_core::Coord;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The yard description is malformed, or a write would break the
    /// one-way relabel invariant.
    InvalidInput {
        /// What went wrong.
        reason: String,
    },
    /// A coordinate is outside the region the operation may touch.
    ///
    /// Internal callers only ever produce in-bounds coordinates, so this
    /// signals a programming error rather than bad input.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid yard input: {reason}"),
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}
