//! Removal requests and per-request receipts.

use std::fmt;

/// A single removal request applied to the yard.
///
/// Requests are applied strictly in submission order; each one is a
/// complete mutation of the grid before the next is considered.
///
/// # Examples
///
/// ```
/// use yard_core::{Request, RequestKind};
///
/// let crane = Request::crane('A');
/// let forklift = Request::forklift('B');
///
/// assert_eq!(crane.kind(), RequestKind::Crane);
/// assert_eq!(forklift.tag(), 'B');
/// assert_eq!(forklift.to_string(), "forklift 'B'");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Request {
    /// Remove every box of `tag`, wherever it sits.
    Crane {
        /// Type tag to remove.
        tag: char,
    },
    /// Remove only boxes of `tag` that touch the exterior through a
    /// chain of empty cells.
    Forklift {
        /// Type tag to remove.
        tag: char,
    },
}

impl Request {
    /// Shorthand for [`Request::Crane`].
    pub fn crane(tag: char) -> Self {
        Self::Crane { tag }
    }

    /// Shorthand for [`Request::Forklift`].
    pub fn forklift(tag: char) -> Self {
        Self::Forklift { tag }
    }

    /// The type tag this request targets.
    pub fn tag(&self) -> char {
        match *self {
            Self::Crane { tag } | Self::Forklift { tag } => tag,
        }
    }

    /// The request's kind without its payload.
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Crane { .. } => RequestKind::Crane,
            Self::Forklift { .. } => RequestKind::Forklift,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.tag())
    }
}

/// Discriminant of a [`Request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Unconditional removal.
    Crane,
    /// Exterior-reachable removal.
    Forklift,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crane => write!(f, "crane"),
            Self::Forklift => write!(f, "forklift"),
        }
    }
}

/// Outcome of applying one request.
///
/// Emitted by the simulator for every request, including no-ops, so the
/// caller can reconstruct the full removal history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Zero-based position of the request in application order.
    pub index: usize,
    /// The request that was applied.
    pub request: Request,
    /// Number of cells this request cleared.
    pub removed: usize,
    /// Non-empty cells left in the yard after this request.
    pub remaining: usize,
}

impl Receipt {
    /// Returns `true` if the request cleared nothing.
    pub fn is_noop(&self) -> bool {
        self.removed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_match_variants() {
        assert_eq!(Request::crane('X'), Request::Crane { tag: 'X' });
        assert_eq!(Request::forklift('X'), Request::Forklift { tag: 'X' });
    }

    #[test]
    fn kind_and_tag() {
        let r = Request::Crane { tag: 'Y' };
        assert_eq!(r.kind(), RequestKind::Crane);
        assert_eq!(r.tag(), 'Y');
        assert_eq!(Request::forklift('Y').kind(), RequestKind::Forklift);
    }

    #[test]
    fn display_names_kind_and_tag() {
        assert_eq!(Request::crane('A').to_string(), "crane 'A'");
        assert_eq!(RequestKind::Forklift.to_string(), "forklift");
    }

    #[test]
    fn receipt_noop() {
        let receipt = Receipt {
            index: 0,
            request: Request::forklift('Q'),
            removed: 0,
            remaining: 7,
        };
        assert!(receipt.is_noop());
    }
}
