//! Core types for the yard simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the workspace: cell labels, padded
//! coordinates, removal requests, and per-request receipts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod label;
pub mod request;

pub use label::{Coord, Label};
pub use request::{Receipt, Request, RequestKind};
