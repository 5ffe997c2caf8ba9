//! Grid invariant test helpers.
//!
//! These functions verify the structural contract every [`YardGrid`]
//! must satisfy regardless of its contents. Reused by the unit tests and
//! property tests in `grid.rs`.

use crate::grid::YardGrid;
use indexmap::IndexSet;
use yard_core::{Coord, Label};

fn all_coords(grid: &YardGrid) -> Vec<Coord> {
    let mut out = Vec::with_capacity(grid.padded_len());
    for row in 0..grid.padded_rows() {
        for col in 0..grid.padded_cols() {
            out.push(Coord::new(row, col));
        }
    }
    out
}

/// Assert that every padding cell is empty.
pub fn assert_padding_empty(grid: &YardGrid) {
    for coord in all_coords(grid) {
        if !grid.is_interior(coord) {
            assert_eq!(
                grid.get(coord).unwrap(),
                Label::Empty,
                "padding cell {coord} is not empty"
            );
        }
    }
}

/// Assert that `b in N(a)` implies `a in N(b)`.
pub fn assert_neighbours_symmetric(grid: &YardGrid) {
    for a in all_coords(grid) {
        for b in grid.neighbours(a) {
            assert!(
                grid.neighbours(b).contains(&a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert that neighbours are in bounds, distinct, never the cell itself,
/// and exactly one orthogonal step away.
pub fn assert_neighbours_well_formed(grid: &YardGrid) {
    for a in all_coords(grid) {
        let n = grid.neighbours(a);
        let unique: IndexSet<Coord> = n.iter().copied().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours for {a}");
        for b in n {
            assert!(grid.contains(b), "neighbour {b} of {a} out of bounds");
            assert_ne!(a, b, "{a} lists itself as a neighbour");
            let step = a.row.abs_diff(b.row) + a.col.abs_diff(b.col);
            assert_eq!(step, 1, "{b} is not orthogonally adjacent to {a}");
        }
    }
}

/// Assert that `interior()` visits every yard cell once, in increasing
/// flat-index order.
pub fn assert_interior_canonical(grid: &YardGrid) {
    let indices: IndexSet<usize> = grid
        .interior()
        .map(|coord| {
            assert!(grid.is_interior(coord), "{coord} yielded but not interior");
            grid.index(coord).unwrap()
        })
        .collect();
    assert_eq!(indices.len(), grid.cell_count());
    assert!(
        indices.iter().zip(indices.iter().skip(1)).all(|(a, b)| a < b),
        "interior ordering is not row-major"
    );
}

/// Run all grid compliance checks.
pub fn run_full_compliance(grid: &YardGrid) {
    assert_padding_empty(grid);
    assert_neighbours_symmetric(grid);
    assert_neighbours_well_formed(grid);
    assert_interior_canonical(grid);
}
