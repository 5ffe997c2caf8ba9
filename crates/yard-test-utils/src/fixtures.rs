//! Known-answer yard scenarios.
//!
//! Each [`Scenario`] pairs a yard and a request sequence with the number
//! of boxes that must remain. Shared by engine, facade, and oracle tests.

use yard_core::Request;

/// A yard, the requests to apply to it, and the expected remaining count.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub yard: &'static [&'static str],
    pub requests: Vec<Request>,
    pub expected: usize,
}

impl Scenario {
    fn new(
        name: &'static str,
        yard: &'static [&'static str],
        requests: Vec<Request>,
        expected: usize,
    ) -> Self {
        Self {
            name,
            yard,
            requests,
            expected,
        }
    }
}

/// Every canned scenario.
pub fn scenarios() -> Vec<Scenario> {
    use Request as R;
    vec![
        Scenario::new(
            "crane_clears_cross",
            &["..X..", ".XXX.", "..X.."],
            vec![R::crane('X')],
            0,
        ),
        Scenario::new(
            "forklift_clears_frame",
            &["XXXXX", "X...X", "XXXXX"],
            vec![R::forklift('X')],
            0,
        ),
        Scenario::new(
            "forklift_clears_corners",
            &["X.X", "...", "X.X"],
            vec![R::forklift('X')],
            0,
        ),
        Scenario::new(
            "mixed_depot",
            &["AZWQY", "CAABX", "BBDDA", "ACACA"],
            vec![R::forklift('A'), R::crane('B'), R::forklift('A')],
            11,
        ),
        Scenario::new(
            "hollow_tower_forklift_only",
            &["HAH", "HBH", "HHH", "HAH", "HBH"],
            vec![
                R::forklift('C'),
                R::forklift('B'),
                R::forklift('B'),
                R::forklift('B'),
                R::forklift('B'),
                R::forklift('H'),
            ],
            4,
        ),
        Scenario::new(
            "hollow_tower_with_crane",
            &["HAH", "HBH", "HHH", "HAH", "HBH"],
            vec![
                R::forklift('C'),
                R::crane('B'),
                R::forklift('B'),
                R::forklift('B'),
                R::forklift('B'),
                R::forklift('H'),
            ],
            3,
        ),
        Scenario::new(
            "crane_opens_forklift_path",
            &["YYYY", "YXXY", "YYYY"],
            vec![R::crane('Y'), R::forklift('X')],
            0,
        ),
        Scenario::new(
            "forklift_before_crane",
            &["YYYY", "YXXY", "YYYY"],
            vec![R::forklift('X'), R::crane('Y')],
            2,
        ),
        Scenario::new(
            "target_not_a_waypoint",
            &["BBB", "AAB", "BBB"],
            vec![R::forklift('A')],
            8,
        ),
        Scenario::new(
            "pocket_behind_target",
            &["BABB", "B.AB", "BBBB"],
            vec![R::forklift('A')],
            10,
        ),
        Scenario::new(
            "sealed_pocket",
            &["BBBBB", "B.A.B", "BBBBB"],
            vec![R::forklift('A')],
            13,
        ),
        Scenario::new(
            "peel_two_layers",
            &["AAA", "AAA", "AAA"],
            vec![R::forklift('A'), R::forklift('A')],
            0,
        ),
        Scenario::new("no_requests", &["AB.", ".CD"], vec![], 4),
    ]
}
