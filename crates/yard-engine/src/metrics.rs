//! Run metrics for the simulator.
//!
//! [`RunMetrics`] accumulates counters across every request applied by a
//! [`YardSimulator`](crate::YardSimulator).

/// Counters collected while applying requests.
///
/// Durations are in microseconds. All counters are cumulative over the
/// simulator's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total requests applied.
    pub requests_applied: u64,
    /// Crane requests applied.
    pub crane_requests: u64,
    /// Forklift requests applied.
    pub forklift_requests: u64,
    /// Requests that cleared nothing.
    pub noop_requests: u64,
    /// Cells cleared across all requests.
    pub cells_removed: u64,
    /// Empty cells dequeued across all forklift searches.
    pub cells_explored: u64,
    /// Wall-clock time spent inside `apply()`, in microseconds.
    pub apply_us: u64,
}
