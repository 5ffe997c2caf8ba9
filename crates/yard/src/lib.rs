//! Yard: a storage-yard simulator with crane and forklift removal.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all yard sub-crates. For most users, adding `yard` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use yard::prelude::*;
//!
//! let storage = ["AZWQY", "CAABX", "BBDDA", "ACACA"];
//! let requests = [
//!     Request::forklift('A'),
//!     Request::crane('B'),
//!     Request::forklift('A'),
//! ];
//!
//! // One-shot: just the final count.
//! assert_eq!(simulate(&storage, &requests).unwrap(), 11);
//!
//! // Step by step, with receipts.
//! let mut sim = YardSimulator::new(&storage, SimConfig::default()).unwrap();
//! let receipts = sim.apply_all(&requests).unwrap();
//! assert_eq!(receipts[0].removed, 5);
//! assert_eq!(sim.remaining(), 11);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `yard-core` | Labels, coordinates, requests, receipts |
//! | [`space`] | `yard-space` | Padded grid and grid errors |
//! | [`engine`] | `yard-engine` | Reachability search, crane, simulator, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`yard-core`).
pub use yard_core as types;

/// Padded grid storage (`yard-space`).
///
/// [`space::YardGrid`] owns the cell labels; [`space::GridError`] reports
/// malformed yards and out-of-bounds access.
pub use yard_space as space;

/// Request engine (`yard-engine`).
///
/// [`engine::YardSimulator`] applies requests in order;
/// [`engine::exterior_reach`] exposes the forklift search on its own.
pub use yard_engine as engine;

pub use yard_engine::{simulate, simulate_with};

/// Common imports for typical yard usage.
///
/// ```rust
/// use yard::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use yard_core::{Coord, Label, Receipt, Request, RequestKind};

    // Grid
    pub use yard_space::{GridError, YardGrid};

    // Engine
    pub use yard_engine::{
        simulate, simulate_with, ConfigError, RunMetrics, SearchStrategy, SimConfig, SimError,
        YardSimulator,
    };
}
