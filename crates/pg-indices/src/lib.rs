//! pg-indices: topological indices of power graphs.
//!
//! Provides:
//! - first Zagreb, Wiener and Gutman indices
//! - hop distances by breadth-first search (streamed sums or a full table)
//! - index names, selections and result maps

pub mod calculator;
pub mod distance;
pub mod error;
pub mod kind;

pub use calculator::{compute, first_zagreb_index, gutman_index, wiener_index};
pub use distance::{DistanceSums, DistanceTable};
pub use error::IndexError;
pub use kind::{IndexKind, IndexResult, IndexSelection};
