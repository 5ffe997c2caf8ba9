//! Cell labels and the [`Coord`] type.

use std::fmt;

/// The contents of a single yard cell.
///
/// A cell is either empty or holds a box of exactly one type, identified
/// by a single-character tag. Labels are plain values: mutating a cell
/// means replacing its label.
///
/// # Examples
///
/// ```
/// use yard_core::Label;
///
/// assert_eq!(Label::from_char('.', '.'), Label::Empty);
/// assert_eq!(Label::from_char('A', '.'), Label::Tag('A'));
/// assert!(Label::Tag('A').is_tag('A'));
/// assert!(!Label::Empty.is_tag('.'));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// No box stored; traversable by the reachability search.
    #[default]
    Empty,
    /// A box of the given type.
    Tag(char),
}

impl Label {
    /// Marker character used for empty cells unless configured otherwise.
    pub const DEFAULT_EMPTY_MARKER: char = '.';

    /// Decode a yard character, treating `empty_marker` as [`Label::Empty`].
    pub fn from_char(ch: char, empty_marker: char) -> Self {
        if ch == empty_marker {
            Self::Empty
        } else {
            Self::Tag(ch)
        }
    }

    /// Encode back to a yard character.
    pub fn to_char(self, empty_marker: char) -> char {
        match self {
            Self::Empty => empty_marker,
            Self::Tag(tag) => tag,
        }
    }

    /// Returns `true` for [`Label::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The type tag, if any.
    pub fn tag(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Tag(tag) => Some(tag),
        }
    }

    /// Returns `true` if this cell holds a box of type `tag`.
    ///
    /// Never true for [`Label::Empty`], even when `tag` happens to equal
    /// the empty marker.
    pub fn is_tag(self, tag: char) -> bool {
        self == Self::Tag(tag)
    }
}

impl From<char> for Label {
    fn from(ch: char) -> Self {
        Self::from_char(ch, Self::DEFAULT_EMPTY_MARKER)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char(Self::DEFAULT_EMPTY_MARKER))
    }
}

/// A `(row, col)` position in padded grid coordinates.
///
/// Row and column 0 belong to the padding ring; the real yard occupies
/// rows `1..=rows` and columns `1..=cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, counted from the top of the padded grid.
    pub row: usize,
    /// Column index, counted from the left of the padded grid.
    pub col: usize,
}

impl Coord {
    /// The fixed exterior origin of every padded grid.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Construct a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
