//! Crane removal: clear every box of a type.

use yard_core::Coord;
use yard_space::{GridError, YardGrid};

/// Clear every yard cell holding a box of type `tag`.
///
/// Reachability plays no part: buried boxes go too. Returns the number of
/// cells cleared; a tag absent from the yard clears nothing.
///
/// # Examples
///
/// ```
/// use yard_engine::crane;
/// use yard_space::YardGrid;
///
/// let mut grid = YardGrid::build(&["..X..", ".XXX.", "..X.."]).unwrap();
/// assert_eq!(crane(&mut grid, 'X').unwrap(), 5);
/// assert_eq!(grid.count_non_empty(), 0);
/// ```
pub fn crane(grid: &mut YardGrid, tag: char) -> Result<usize, GridError> {
    let coords: Vec<Coord> = grid.interior().collect();
    let mut removed = 0;
    for coord in coords {
        if grid.get(coord)?.is_tag(tag) {
            grid.clear(coord)?;
            removed += 1;
        }
    }
    Ok(removed)
}
