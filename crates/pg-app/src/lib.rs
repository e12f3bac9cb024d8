//! Shared application service layer for powergraph.
//!
//! This crate is the boundary the CLI talks to: it validates requests,
//! runs the enumerate, build and index pipeline, and assembles trend series
//! across exponents.

pub mod error;
pub mod progress;
pub mod series;
pub mod service;
pub mod validate;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use pg_core::{K_MAX, PgConfig};
pub use pg_indices::{IndexKind, IndexResult, IndexSelection};
pub use progress::{SeriesProgressEvent, SeriesStage};
pub use series::{IndexSeries, SeriesPoint, compute_series, compute_series_with_progress};
pub use service::{DisplayGraph, build_graph_for_display, compute_indices, is_degenerate};
pub use validate::{load_config, parse_selection, validate_request};
