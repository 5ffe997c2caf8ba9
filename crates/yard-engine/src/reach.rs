//! Exterior reachability search for forklift requests.
//!
//! A box can be pulled out by forklift when it sits orthogonally next to
//! an empty cell that is connected to the outside of the yard through
//! other empty cells. The search walks empty cells only:
//!
//! - **empty** cells are marked visited and enqueued;
//! - **target** boxes are recorded as removable but never visited or
//!   enqueued, so a target can never act as a waypoint to another target;
//! - boxes of **any other type** are opaque and ignored.
//!
//! Removal happens after the walk completes. Clearing boxes mid-walk would
//! open paths that did not exist when the request arrived.

use std::collections::VecDeque;

use indexmap::IndexSet;
use tracing::trace;
use yard_core::{Coord, Label};
use yard_space::{GridError, YardGrid};

use crate::config::SearchStrategy;

/// Outcome of one exterior reachability search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reach {
    /// Target boxes touching the exterior, in discovery order, deduplicated.
    pub removable: IndexSet<Coord>,
    /// Number of empty cells the walk dequeued. Padding cells count under
    /// [`SearchStrategy::PaddedOrigin`].
    pub explored: usize,
}

impl Reach {
    /// Number of removable boxes found.
    pub fn len(&self) -> usize {
        self.removable.len()
    }

    /// Returns `true` if no target box touches the exterior.
    pub fn is_empty(&self) -> bool {
        self.removable.is_empty()
    }
}

/// Per-request search state. Dropped when the search returns.
struct Search<'g> {
    grid: &'g YardGrid,
    tag: char,
    interior_only: bool,
    visited: Vec<bool>,
    queue: VecDeque<Coord>,
    reach: Reach,
}

impl<'g> Search<'g> {
    fn new(grid: &'g YardGrid, tag: char, interior_only: bool) -> Self {
        Self {
            grid,
            tag,
            interior_only,
            visited: vec![false; grid.padded_len()],
            queue: VecDeque::new(),
            reach: Reach::default(),
        }
    }

    fn visit(&mut self, coord: Coord) -> Result<(), GridError> {
        let idx = self.grid.checked_index(coord)?;
        if self.visited[idx] {
            return Ok(());
        }
        match self.grid.get(coord)? {
            Label::Empty => {
                self.visited[idx] = true;
                self.queue.push_back(coord);
            }
            label if label.is_tag(self.tag) => {
                self.reach.removable.insert(coord);
            }
            Label::Tag(_) => {}
        }
        Ok(())
    }

    fn seed_origin(&mut self) -> Result<(), GridError> {
        self.visit(Coord::ORIGIN)
    }

    fn seed_border(&mut self) -> Result<(), GridError> {
        let border: Vec<Coord> = self
            .grid
            .interior()
            .filter(|&coord| self.grid.is_exterior_adjacent(coord))
            .collect();
        for coord in border {
            self.visit(coord)?;
        }
        Ok(())
    }

    fn expand(&mut self) -> Result<(), GridError> {
        while let Some(cell) = self.queue.pop_front() {
            self.reach.explored += 1;
            for nb in self.grid.neighbours(cell) {
                if self.interior_only && !self.grid.is_interior(nb) {
                    continue;
                }
                self.visit(nb)?;
            }
        }
        Ok(())
    }
}

/// Find every box of type `tag` reachable from outside the yard.
///
/// Does not modify the grid. A tag that does not occur in the yard yields
/// an empty [`Reach`].
///
/// # Examples
///
/// ```
/// use yard_engine::{exterior_reach, SearchStrategy};
/// use yard_space::YardGrid;
///
/// // The centre 'A' is walled in by 'B' boxes.
/// let grid = YardGrid::build(&["BAB", "BAB", "BBB"]).unwrap();
/// let reach = exterior_reach(&grid, 'A', SearchStrategy::PaddedOrigin).unwrap();
/// assert_eq!(reach.len(), 1);
/// ```
pub fn exterior_reach(
    grid: &YardGrid,
    tag: char,
    strategy: SearchStrategy,
) -> Result<Reach, GridError> {
    let mut search = Search::new(grid, tag, strategy == SearchStrategy::BorderSeeded);
    match strategy {
        SearchStrategy::PaddedOrigin => search.seed_origin()?,
        SearchStrategy::BorderSeeded => search.seed_border()?,
    }
    search.expand()?;
    trace!(
        tag = %tag,
        %strategy,
        explored = search.reach.explored,
        removable = search.reach.len(),
        "exterior search finished"
    );
    Ok(search.reach)
}

/// Run [`exterior_reach`] and clear every box it found.
///
/// All boxes are cleared together after the search, against the layout
/// the request saw on arrival.
pub fn forklift(
    grid: &mut YardGrid,
    tag: char,
    strategy: SearchStrategy,
) -> Result<Reach, GridError> {
    let reach = exterior_reach(grid, tag, strategy)?;
    for &coord in &reach.removable {
        grid.clear(coord)?;
    }
    Ok(reach)
}
