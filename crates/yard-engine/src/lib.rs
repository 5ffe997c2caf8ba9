//! Request engine for yard simulations.
//!
//! Provides the two removal operations and the sequential dispatcher
//! that applies them:
//!
//! - [`crane()`]: clear every box of a type.
//! - [`forklift()`]: clear boxes of a type that touch the exterior through
//!   empty cells, computed by [`exterior_reach()`].
//! - [`YardSimulator`]: owns the grid, applies [`Request`](yard_core::Request)s
//!   in order, and records [`Receipt`](yard_core::Receipt)s and [`RunMetrics`].
//!
//! The free function [`simulate()`] wraps the whole pipeline for callers
//! that only need the final count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod crane;
pub mod metrics;
pub mod reach;
pub mod simulator;

pub use config::{ConfigError, SearchStrategy, SimConfig};
pub use crane::crane;
pub use metrics::RunMetrics;
pub use reach::{exterior_reach, forklift, Reach};
pub use simulator::{simulate, simulate_with, SimError, YardSimulator};
