//! Benchmark profiles for the yard simulator.
//!
//! - [`reference_profile`]: 100x100 yard (10K cells) with 64 mixed requests
//! - [`stress_profile`]: 316x316 yard (~100K cells) with 256 mixed requests
//! - [`spiral_yard`]: worst case for the search, one long empty corridor

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use yard_core::Request;
use yard_test_utils::{random_requests, random_yard};

/// Tags used by generated profiles.
pub const TAGS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// A yard plus the requests to run against it.
pub struct Profile {
    pub yard: Vec<String>,
    pub requests: Vec<Request>,
}

/// 100x100 yard, 20% empty, 64 requests (one in four a crane).
pub fn reference_profile(seed: u64) -> Profile {
    Profile {
        yard: random_yard(seed, 100, 100, &TAGS, 0.2),
        requests: random_requests(seed, 64, &TAGS, 0.25),
    }
}

/// 316x316 yard, 20% empty, 256 requests.
pub fn stress_profile(seed: u64) -> Profile {
    Profile {
        yard: random_yard(seed, 316, 316, &TAGS, 0.2),
        requests: random_requests(seed, 256, &TAGS, 0.25),
    }
}

/// A `size x size` yard of 'W' walls carved into a single spiral
/// corridor, with an 'A' box at the corridor's dead end.
///
/// The forklift search has to walk the whole corridor to find the box.
/// `size` is clamped to at least 5.
pub fn spiral_yard(size: usize) -> Vec<String> {
    let size = size.max(5);
    let mut cells = vec![vec!['W'; size]; size];
    let (mut top, mut left) = (0usize, 0usize);
    let (mut bottom, mut right) = (size - 1, size - 1);
    let mut last = (0, 0);
    // Carve rings inward, leaving one wall between consecutive loops and
    // a gap on the left edge of each ring to connect it to the next.
    while top + 2 <= bottom && left + 2 <= right {
        for c in left..=right {
            cells[top][c] = '.';
            last = (top, c);
        }
        for r in top..=bottom {
            cells[r][right] = '.';
            last = (r, right);
        }
        for c in (left..=right).rev() {
            cells[bottom][c] = '.';
            last = (bottom, c);
        }
        for r in (top + 2..=bottom).rev() {
            cells[r][left] = '.';
            last = (r, left);
        }
        top += 2;
        left += 2;
        bottom = bottom.saturating_sub(2);
        right = right.saturating_sub(2);
        if top <= bottom && left <= right {
            cells[top][left - 1] = '.';
        }
    }
    cells[last.0][last.1] = 'A';
    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_engine::{exterior_reach, SearchStrategy};
    use yard_space::YardGrid;

    #[test]
    fn profiles_are_rectangular() {
        let p = reference_profile(1);
        assert_eq!(p.yard.len(), 100);
        assert!(p.yard.iter().all(|row| row.chars().count() == 100));
        assert_eq!(p.requests.len(), 64);
    }

    #[test]
    fn spiral_box_is_reachable() {
        for size in [5, 9, 16, 33] {
            let yard = spiral_yard(size);
            let grid = YardGrid::build(&yard).unwrap();
            assert_eq!(grid.count_tag('A'), 1);
            let reach = exterior_reach(&grid, 'A', SearchStrategy::PaddedOrigin).unwrap();
            assert_eq!(reach.len(), 1, "size {size}");
        }
    }
}
