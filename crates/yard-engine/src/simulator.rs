//! Sequential request dispatcher.
//!
//! [`YardSimulator`] owns the padded grid and applies requests one at a
//! time. Each request is a complete mutation of the grid before the next
//! is looked at; nothing is reordered or batched.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, so the grid has exactly one
//! writer. The simulator is [`Send`] and may be moved to another thread,
//! but there is no shared state to coordinate.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::{debug, info};
use yard_core::{Receipt, Request};
use yard_space::{GridError, YardGrid};

use crate::config::{ConfigError, SimConfig};
use crate::crane::crane;
use crate::metrics::RunMetrics;
use crate::reach::forklift;

// Compile-time assertion: YardSimulator is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<YardSimulator>();
    }
};

// ── SimError ───────────────────────────────────────────────────────

/// Errors surfaced by the simulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The yard was malformed, or a grid access went out of bounds.
    Grid(GridError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── YardSimulator ──────────────────────────────────────────────────

/// Owns a yard and applies crane and forklift requests to it in order.
///
/// # Example
///
/// ```
/// use yard_core::Request;
/// use yard_engine::{SimConfig, YardSimulator};
///
/// let mut sim = YardSimulator::new(&["AZWQY", "CAABX", "BBDDA", "ACACA"], SimConfig::default()).unwrap();
/// sim.apply_all(&[Request::forklift('A'), Request::crane('B'), Request::forklift('A')]).unwrap();
/// assert_eq!(sim.remaining(), 11);
/// ```
#[derive(Debug)]
pub struct YardSimulator {
    grid: YardGrid,
    config: SimConfig,
    metrics: RunMetrics,
    applied: usize,
}

impl YardSimulator {
    /// Validate `config`, build the padded grid from `yard`, and return a
    /// simulator ready to take requests.
    pub fn new<S: AsRef<str>>(yard: &[S], config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let grid = YardGrid::build_with_marker(yard, config.empty_marker)?;
        Self::from_grid(grid, config)
    }

    /// Wrap an existing grid. The grid keeps its own empty marker.
    pub fn from_grid(grid: YardGrid, config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            boxes = grid.count_non_empty(),
            strategy = %config.strategy,
            "yard simulator initialised"
        );
        Ok(Self {
            grid,
            config,
            metrics: RunMetrics::default(),
            applied: 0,
        })
    }

    /// Apply one request and return its receipt.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Grid`] only if a grid access goes out of
    /// bounds, which the search and sweep never do on a well-formed grid.
    pub fn apply(&mut self, request: &Request) -> Result<Receipt, SimError> {
        let start = Instant::now();
        let removed = match *request {
            Request::Crane { tag } => {
                self.metrics.crane_requests += 1;
                crane(&mut self.grid, tag)?
            }
            Request::Forklift { tag } => {
                self.metrics.forklift_requests += 1;
                let reach = forklift(&mut self.grid, tag, self.config.strategy)?;
                self.metrics.cells_explored += reach.explored as u64;
                reach.len()
            }
        };
        let remaining = self.grid.count_non_empty();

        self.metrics.requests_applied += 1;
        self.metrics.cells_removed += removed as u64;
        if removed == 0 {
            self.metrics.noop_requests += 1;
        }
        self.metrics.apply_us += start.elapsed().as_micros() as u64;

        let receipt = Receipt {
            index: self.applied,
            request: *request,
            removed,
            remaining,
        };
        self.applied += 1;
        debug!(
            index = receipt.index,
            request = %request,
            removed,
            remaining,
            "request applied"
        );
        Ok(receipt)
    }

    /// Apply `requests` in order, stopping at the first error.
    pub fn apply_all<'a, I>(&mut self, requests: I) -> Result<Vec<Receipt>, SimError>
    where
        I: IntoIterator<Item = &'a Request>,
    {
        requests
            .into_iter()
            .map(|request| self.apply(request))
            .collect()
    }

    /// Boxes left in the yard.
    pub fn remaining(&self) -> usize {
        self.grid.count_non_empty()
    }

    /// Number of requests applied so far.
    pub fn requests_applied(&self) -> usize {
        self.applied
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> &YardGrid {
        &self.grid
    }

    /// The configuration this simulator was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Cumulative metrics.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Consume the simulator and return the final grid.
    pub fn into_grid(self) -> YardGrid {
        self.grid
    }
}

/// Apply `requests` to `yard` with the default configuration and return
/// the number of boxes left.
///
/// ```
/// use yard_core::Request;
/// use yard_engine::simulate;
///
/// let left = simulate(&["..X..", ".XXX.", "..X.."], &[Request::crane('X')]).unwrap();
/// assert_eq!(left, 0);
/// ```
pub fn simulate<S: AsRef<str>>(yard: &[S], requests: &[Request]) -> Result<usize, SimError> {
    simulate_with(yard, requests, SimConfig::default())
}

/// [`simulate`] with an explicit configuration.
pub fn simulate_with<S: AsRef<str>>(
    yard: &[S],
    requests: &[Request],
    config: SimConfig,
) -> Result<usize, SimError> {
    let mut sim = YardSimulator::new(yard, config)?;
    sim.apply_all(requests)?;
    Ok(sim.remaining())
}
