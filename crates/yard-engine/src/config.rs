//! Simulator configuration and validation.
//!
//! [`SimConfig`] is the builder-input for [`YardSimulator`](crate::YardSimulator).
//! [`validate()`](SimConfig::validate) checks it before any grid is built.

use std::error::Error;
use std::fmt;

use yard_core::Label;

// ── SearchStrategy ─────────────────────────────────────────────────

/// How a forklift request seeds its exterior reachability search.
///
/// Both strategies compute the same removal set on every yard; they
/// differ only in where the breadth-first walk starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Start from the padding corner `(0, 0)` and walk the padding ring
    /// along with every empty cell connected to it.
    #[default]
    PaddedOrigin,
    /// Seed from every empty yard cell on the yard's border, record
    /// border boxes of the target type directly, and never step into
    /// the padding ring.
    BorderSeeded,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaddedOrigin => write!(f, "padded-origin"),
            Self::BorderSeeded => write!(f, "border-seeded"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The empty marker is whitespace or a control character, which would
    /// make yard rows ambiguous when rendered.
    InvalidEmptyMarker {
        /// The rejected marker.
        marker: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmptyMarker { marker } => {
                write!(f, "invalid empty marker {marker:?}: must be a visible character")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for a [`YardSimulator`](crate::YardSimulator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Character that denotes an empty cell in yard rows. Default: `'.'`.
    pub empty_marker: char,
    /// Seeding strategy for forklift searches. Default: [`SearchStrategy::PaddedOrigin`].
    pub strategy: SearchStrategy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            empty_marker: Label::DEFAULT_EMPTY_MARKER,
            strategy: SearchStrategy::default(),
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.empty_marker.is_whitespace() || self.empty_marker.is_control() {
            return Err(ConfigError::InvalidEmptyMarker {
                marker: self.empty_marker,
            });
        }
        Ok(())
    }
}
