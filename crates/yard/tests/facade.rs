use yard::prelude::*;
use yard_test_utils::scenarios;

#[test]
fn facade_runs_every_scenario() {
    for s in scenarios() {
        assert_eq!(simulate(s.yard, &s.requests), Ok(s.expected), "{}", s.name);
    }
}

#[test]
fn module_aliases_resolve() {
    let grid = yard::space::YardGrid::build(&["A."]).unwrap();
    let reach =
        yard::engine::exterior_reach(&grid, 'A', yard::engine::SearchStrategy::default()).unwrap();
    assert_eq!(reach.removable.first(), Some(&yard::types::Coord::new(1, 1)));
}

#[test]
fn errors_chain_through_sim_error() {
    use std::error::Error;

    let err = simulate(&["AB", "C"], &[]).unwrap_err();
    let source = err.source().expect("grid error as source");
    assert!(source.to_string().contains("row 1"));
}
