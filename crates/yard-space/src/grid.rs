//! Padded 2D yard grid with 4-connected neighbourhood (N/S/W/E).

use crate::error::GridError;
use smallvec::SmallVec;
use std::fmt;
use yard_core::{Coord, Label};

/// Orthogonal neighbour offsets in north, south, west, east order.
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A storage yard surrounded by one ring of empty padding.
///
/// For a yard of `rows x cols` cells the grid stores
/// `(rows + 2) x (cols + 2)` labels in row-major order. The padding ring
/// is empty at construction and [`set`](YardGrid::set) refuses to write
/// into it, so it stays empty for the grid's whole lifetime. Interior
/// cells only ever move from tagged to empty.
///
/// # Examples
///
/// ```
/// use yard_core::{Coord, Label};
/// use yard_space::YardGrid;
///
/// let grid = YardGrid::build(&["A.B", "CDE"]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.padded_rows(), 4);
///
/// // The yard's top-left cell sits at padded coordinate (1, 1).
/// assert_eq!(grid.get(Coord::new(1, 1)).unwrap(), Label::Tag('A'));
/// assert_eq!(grid.get(Coord::ORIGIN).unwrap(), Label::Empty);
/// assert_eq!(grid.count_non_empty(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YardGrid {
    rows: usize,
    cols: usize,
    empty_marker: char,
    cells: Vec<Label>,
}

impl YardGrid {
    /// Build a padded grid from textual rows using `'.'` as the empty marker.
    ///
    /// Returns `Err(GridError::InvalidInput)` if the yard has no rows, its
    /// rows are empty, or the rows differ in length.
    pub fn build<S: AsRef<str>>(yard: &[S]) -> Result<Self, GridError> {
        Self::build_with_marker(yard, Label::DEFAULT_EMPTY_MARKER)
    }

    /// Build a padded grid from textual rows with a custom empty marker.
    ///
    /// Row length is measured in characters, not bytes.
    pub fn build_with_marker<S: AsRef<str>>(
        yard: &[S],
        empty_marker: char,
    ) -> Result<Self, GridError> {
        let rows = yard
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|ch| Label::from_char(ch, empty_marker))
                    .collect()
            })
            .collect();
        Self::from_label_rows(rows, empty_marker)
    }

    /// Build a padded grid from already-decoded label rows.
    pub fn from_label_rows(rows: Vec<Vec<Label>>, empty_marker: char) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::InvalidInput {
                reason: "yard has no rows".to_string(),
            });
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::InvalidInput {
                reason: "yard rows have no cells".to_string(),
            });
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(GridError::InvalidInput {
                reason: format!("row {i} has {} cells, expected {cols}", row.len()),
            });
        }

        let row_count = rows.len();
        let width = cols + 2;
        let mut cells = vec![Label::Empty; (row_count + 2) * width];
        for (r, row) in rows.into_iter().enumerate() {
            let start = (r + 1) * width + 1;
            cells[start..start + cols].copy_from_slice(&row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            empty_marker,
            cells,
        })
    }

    /// Number of yard rows, excluding padding.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of yard columns, excluding padding.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows including the padding ring.
    pub fn padded_rows(&self) -> usize {
        self.rows + 2
    }

    /// Number of columns including the padding ring.
    pub fn padded_cols(&self) -> usize {
        self.cols + 2
    }

    /// Number of yard cells, excluding padding.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of stored labels, including padding.
    pub fn padded_len(&self) -> usize {
        self.cells.len()
    }

    /// Character used for empty cells when rendering.
    pub fn empty_marker(&self) -> char {
        self.empty_marker
    }

    /// Returns `true` if `coord` lies anywhere in the padded grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.padded_rows() && coord.col < self.padded_cols()
    }

    /// Returns `true` if `coord` is a real yard cell rather than padding.
    pub fn is_interior(&self, coord: Coord) -> bool {
        (1..=self.rows).contains(&coord.row) && (1..=self.cols).contains(&coord.col)
    }

    /// Returns `true` if `coord` is a yard cell on the yard's own border,
    /// i.e. orthogonally adjacent to the padding ring.
    pub fn is_exterior_adjacent(&self, coord: Coord) -> bool {
        self.is_interior(coord)
            && (coord.row == 1 || coord.row == self.rows || coord.col == 1 || coord.col == self.cols)
    }

    /// Row-major flat index of `coord` in the padded grid.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.padded_cols() + coord.col)
    }

    /// Like [`index`](YardGrid::index), but reports `OutOfBounds` instead
    /// of returning `None`.
    pub fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        self.index(coord).ok_or_else(|| GridError::OutOfBounds {
            coord,
            bounds: format!("[0, {}) x [0, {})", self.padded_rows(), self.padded_cols()),
        })
    }

    /// Read the label at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Label, GridError> {
        let idx = self.checked_index(coord)?;
        Ok(self.cells[idx])
    }

    /// Write the label at `coord`.
    ///
    /// Only yard cells may be written; the padding ring answers with
    /// `OutOfBounds`. Writing a tag that differs from the current label
    /// fails with `InvalidInput`, since cells only ever become empty.
    pub fn set(&mut self, coord: Coord, label: Label) -> Result<(), GridError> {
        let idx = self.checked_index(coord)?;
        if !self.is_interior(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                bounds: format!("interior [1, {}] x [1, {}]", self.rows, self.cols),
            });
        }
        let current = self.cells[idx];
        if let Label::Tag(tag) = label {
            if current != label {
                return Err(GridError::InvalidInput {
                    reason: format!(
                        "cannot relabel {coord} from '{}' to '{tag}'",
                        current.to_char(self.empty_marker)
                    ),
                });
            }
        }
        self.cells[idx] = label;
        Ok(())
    }

    /// Empty the cell at `coord`. Returns `true` if it held a box.
    pub fn clear(&mut self, coord: Coord) -> Result<bool, GridError> {
        let was_tagged = !self.get(coord)?.is_empty();
        self.set(coord, Label::Empty)?;
        Ok(was_tagged)
    }

    /// The in-bounds orthogonal neighbours of `coord`, in N, S, W, E order.
    ///
    /// Corners of the padded grid have 2 neighbours, other ring cells 3,
    /// everything else 4.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let mut out = SmallVec::new();
        for (dr, dc) in OFFSETS {
            let (Some(row), Some(col)) = (
                coord.row.checked_add_signed(dr),
                coord.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            let nb = Coord::new(row, col);
            if self.contains(nb) {
                out.push(nb);
            }
        }
        out
    }

    /// Yard cell coordinates in row-major order, padding excluded.
    pub fn interior(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |row| (1..=cols).map(move |col| Coord::new(row, col)))
    }

    fn interior_rows(&self) -> impl Iterator<Item = &[Label]> + '_ {
        let width = self.padded_cols();
        (1..=self.rows).map(move |r| {
            let start = r * width + 1;
            &self.cells[start..start + self.cols]
        })
    }

    /// Number of yard cells holding a box.
    pub fn count_non_empty(&self) -> usize {
        self.interior_rows()
            .map(|row| row.iter().filter(|label| !label.is_empty()).count())
            .sum()
    }

    /// Number of yard cells holding a box of type `tag`.
    pub fn count_tag(&self, tag: char) -> usize {
        self.interior_rows()
            .map(|row| row.iter().filter(|label| label.is_tag(tag)).count())
            .sum()
    }

    /// Render the yard rows back to text, padding excluded.
    pub fn to_rows(&self) -> Vec<String> {
        self.interior_rows()
            .map(|row| row.iter().map(|l| l.to_char(self.empty_marker)).collect())
            .collect()
    }
}

impl fmt::Display for YardGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
