//! Padded grid storage for yard simulations.
//!
//! [`YardGrid`] holds the yard's cell labels surrounded by a one-cell ring
//! of empty padding. The padding gives every exterior-reachability search
//! a single canonical origin at [`Coord::ORIGIN`](yard_core::Coord::ORIGIN)
//! regardless of the yard's shape.
//!
//! All coordinates accepted and returned by this crate are padded
//! coordinates: the real yard occupies rows `1..=rows` and columns
//! `1..=cols`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use grid::YardGrid;
