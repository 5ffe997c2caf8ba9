//! Test utilities for yard simulator development.
//!
//! Provides known-answer [`Scenario`]s, seeded random yard generation,
//! and [`reference_remaining`], an independent oracle that recomputes
//! the final box count with a different algorithm than the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{scenarios, Scenario};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use yard_core::Request;

/// Empty marker used by every generated yard.
pub const EMPTY: char = '.';

/// Generate a `rows x cols` yard from `seed`.
///
/// Each cell is empty with probability `empty_ratio`, otherwise a tag
/// drawn uniformly from `tags`.
pub fn random_yard(seed: u64, rows: usize, cols: usize, tags: &[char], empty_ratio: f64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if tags.is_empty() || rng.random_bool(empty_ratio) {
                        EMPTY
                    } else {
                        tags[rng.random_range(0..tags.len())]
                    }
                })
                .collect()
        })
        .collect()
}

/// Generate `count` requests from `seed`, crane with probability
/// `crane_ratio`, tags drawn uniformly from `tags`.
pub fn random_requests(seed: u64, count: usize, tags: &[char], crane_ratio: f64) -> Vec<Request> {
    assert!(!tags.is_empty(), "random_requests needs at least one tag");
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    (0..count)
        .map(|_| {
            let tag = tags[rng.random_range(0..tags.len())];
            if rng.random_bool(crane_ratio) {
                Request::crane(tag)
            } else {
                Request::forklift(tag)
            }
        })
        .collect()
}

/// Recompute the final box count without padding or a queue.
///
/// Outside air is found by relaxing to a fixpoint: an empty cell is
/// outside if it lies on the yard border or touches an outside cell.
/// A forklift then takes every target on the border or next to outside
/// air. Slow, but shares no code with the engine.
pub fn reference_remaining(yard: &[String], requests: &[Request]) -> usize {
    let mut grid: Vec<Vec<char>> = yard.iter().map(|row| row.chars().collect()).collect();
    for request in requests {
        match *request {
            Request::Crane { tag } => {
                for cell in grid.iter_mut().flatten() {
                    if *cell == tag && tag != EMPTY {
                        *cell = EMPTY;
                    }
                }
            }
            Request::Forklift { tag } => {
                if tag == EMPTY {
                    continue;
                }
                let outside = outside_air(&grid);
                let mut hits = Vec::new();
                for (r, row) in grid.iter().enumerate() {
                    for (c, &cell) in row.iter().enumerate() {
                        if cell == tag && (on_border(&grid, r, c) || touches(&outside, r, c)) {
                            hits.push((r, c));
                        }
                    }
                }
                for (r, c) in hits {
                    grid[r][c] = EMPTY;
                }
            }
        }
    }
    grid.iter().flatten().filter(|&&cell| cell != EMPTY).count()
}

fn on_border(grid: &[Vec<char>], r: usize, c: usize) -> bool {
    r == 0 || c == 0 || r + 1 == grid.len() || c + 1 == grid[r].len()
}

fn touches(mask: &[Vec<bool>], r: usize, c: usize) -> bool {
    (r > 0 && mask[r - 1][c])
        || (r + 1 < mask.len() && mask[r + 1][c])
        || (c > 0 && mask[r][c - 1])
        || (c + 1 < mask[r].len() && mask[r][c + 1])
}

fn outside_air(grid: &[Vec<char>]) -> Vec<Vec<bool>> {
    let mut mask: Vec<Vec<bool>> = grid
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, &cell)| cell == EMPTY && on_border(grid, r, c))
                .collect()
        })
        .collect();
    loop {
        let mut changed = false;
        for r in 0..grid.len() {
            for c in 0..grid[r].len() {
                if grid[r][c] == EMPTY && !mask[r][c] && touches(&mask, r, c) {
                    mask[r][c] = true;
                    changed = true;
                }
            }
        }
        if !changed {
            return mask;
        }
    }
}
