//! pg-core: stable foundation for powergraph.
//!
//! Contains:
//! - arith (gcd, modular multiply, prime powers, totient, primality)
//! - config (exponent ceiling and execution options)
//! - error (shared error types)

pub mod arith;
pub mod config;
pub mod error;

// Re-exports: nice ergonomics for downstream crates
pub use arith::*;
pub use config::{K_MAX, PgConfig};
pub use error::{PgError, PgResult};
