//! Property tests: engine against the reference oracle on seeded yards.

use proptest::prelude::*;
use yard_core::{Coord, Label};
use yard_engine::{
    crane, exterior_reach, forklift, SearchStrategy, SimConfig, YardSimulator,
};
use yard_space::YardGrid;
use yard_test_utils::{random_requests, random_yard, reference_remaining};

const TAGS: [char; 4] = ['A', 'B', 'C', 'D'];

fn padding_is_empty(grid: &YardGrid) -> bool {
    let last_row = grid.padded_rows() - 1;
    let last_col = grid.padded_cols() - 1;
    let top_bottom = (0..=last_col).all(|col| {
        grid.get(Coord::new(0, col)) == Ok(Label::Empty)
            && grid.get(Coord::new(last_row, col)) == Ok(Label::Empty)
    });
    let sides = (0..=last_row).all(|row| {
        grid.get(Coord::new(row, 0)) == Ok(Label::Empty)
            && grid.get(Coord::new(row, last_col)) == Ok(Label::Empty)
    });
    top_bottom && sides
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn engine_matches_oracle(
        seed in any::<u64>(),
        rows in 1usize..10,
        cols in 1usize..10,
        empty_ratio in 0.0f64..0.6,
        count in 0usize..12,
    ) {
        let yard = random_yard(seed, rows, cols, &TAGS, empty_ratio);
        let requests = random_requests(seed, count, &TAGS, 0.25);
        let expected = reference_remaining(&yard, &requests);
        let mut sim = YardSimulator::new(&yard, SimConfig::default()).unwrap();
        sim.apply_all(&requests).unwrap();
        prop_assert_eq!(sim.remaining(), expected);
        prop_assert!(padding_is_empty(sim.grid()));
    }

    #[test]
    fn strategies_agree(
        seed in any::<u64>(),
        rows in 1usize..12,
        cols in 1usize..12,
        empty_ratio in 0.0f64..0.7,
    ) {
        let yard = random_yard(seed, rows, cols, &TAGS, empty_ratio);
        let grid = YardGrid::build(&yard).unwrap();
        for tag in TAGS {
            let padded = exterior_reach(&grid, tag, SearchStrategy::PaddedOrigin).unwrap();
            let border = exterior_reach(&grid, tag, SearchStrategy::BorderSeeded).unwrap();
            let mut a: Vec<Coord> = padded.removable.into_iter().collect();
            let mut b: Vec<Coord> = border.removable.into_iter().collect();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b, "tag {}", tag);
        }
    }

    #[test]
    fn remaining_never_increases(
        seed in any::<u64>(),
        rows in 1usize..10,
        cols in 1usize..10,
        count in 1usize..16,
    ) {
        let yard = random_yard(seed, rows, cols, &TAGS, 0.3);
        let requests = random_requests(seed, count, &TAGS, 0.3);
        let mut sim = YardSimulator::new(&yard, SimConfig::default()).unwrap();
        let mut previous = sim.remaining();
        for receipt in sim.apply_all(&requests).unwrap() {
            prop_assert!(receipt.remaining <= previous);
            prop_assert_eq!(previous - receipt.remaining, receipt.removed);
            previous = receipt.remaining;
        }
    }

    #[test]
    fn forklift_only_removes_reachable_targets(
        seed in any::<u64>(),
        rows in 1usize..10,
        cols in 1usize..10,
        empty_ratio in 0.0f64..0.6,
    ) {
        let yard = random_yard(seed, rows, cols, &TAGS, empty_ratio);
        let mut grid = YardGrid::build(&yard).unwrap();
        let before = grid.clone();
        let reach = forklift(&mut grid, 'A', SearchStrategy::PaddedOrigin).unwrap();
        for coord in before.interior() {
            let was = before.get(coord).unwrap();
            let now = grid.get(coord).unwrap();
            if reach.removable.contains(&coord) {
                prop_assert_eq!(was, Label::Tag('A'));
                prop_assert_eq!(now, Label::Empty);
            } else {
                prop_assert_eq!(was, now);
            }
        }
        // Whatever is left of 'A' after the pass is exactly what the
        // oracle keeps.
        let expected = reference_remaining(&yard, &[yard_core::Request::forklift('A')]);
        prop_assert_eq!(grid.count_non_empty(), expected);
    }

    #[test]
    fn crane_is_idempotent(
        seed in any::<u64>(),
        rows in 1usize..10,
        cols in 1usize..10,
    ) {
        let yard = random_yard(seed, rows, cols, &TAGS, 0.2);
        let mut grid = YardGrid::build(&yard).unwrap();
        let expected = grid.count_tag('B');
        prop_assert_eq!(crane(&mut grid, 'B').unwrap(), expected);
        let snapshot = grid.clone();
        prop_assert_eq!(crane(&mut grid, 'B').unwrap(), 0);
        prop_assert!(forklift(&mut grid, 'B', SearchStrategy::PaddedOrigin).unwrap().is_empty());
        prop_assert_eq!(grid, snapshot);
    }
}
